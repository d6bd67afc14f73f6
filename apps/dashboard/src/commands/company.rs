//! # Company Commands
//!
//! List and edit the companies expenses and invoices refer to.
//!
//! Deleting a company keeps its expenses and invoices; they show up as
//! "Unknown Company" afterwards.

use bizdesk_core::validation::validate_company;
use bizdesk_core::{Company, CompanyDraft, RecordKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Company DTO for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl From<Company> for CompanyDto {
    fn from(c: Company) -> Self {
        CompanyDto {
            id: c.id,
            name: c.name,
            contact_name: c.contact_name,
            contact_email: c.contact_email,
            contact_phone: c.contact_phone,
            address: c.address,
        }
    }
}

/// Company form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl CompanyInput {
    fn into_draft(self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.trim().to_string(),
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            address: self.address,
        }
    }
}

pub fn list_companies(store: &StoreState) -> Vec<CompanyDto> {
    debug!("list_companies command");
    store.with_store(|s| s.companies().iter().cloned().map(CompanyDto::from).collect())
}

pub fn get_company(store: &StoreState, id: &str) -> Result<CompanyDto, ApiError> {
    debug!(id = %id, "get_company command");
    store
        .with_store(|s| s.get_company(id).cloned())
        .map(CompanyDto::from)
        .ok_or_else(|| ApiError::not_found(RecordKind::Company, id))
}

pub fn create_company(store: &StoreState, input: CompanyInput) -> Result<CompanyDto, ApiError> {
    debug!(name = %input.name, "create_company command");
    let draft = input.into_draft();
    validate_company(&draft)?;
    Ok(store.with_store_mut(|s| s.create_company(draft)).into())
}

pub fn update_company(
    store: &StoreState,
    id: &str,
    input: CompanyInput,
) -> Result<CompanyDto, ApiError> {
    debug!(id = %id, "update_company command");
    let draft = input.into_draft();
    validate_company(&draft)?;

    let company = draft.into_company(id.to_string());
    store.with_store_mut(|s| s.update_company(company.clone()))?;
    Ok(company.into())
}

pub fn delete_company(store: &StoreState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_company command");
    store.with_store_mut(|s| s.delete_company(id))?;
    Ok(())
}

//! # Expense Commands
//!
//! ## List Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_expenses(query)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ListQuery::to_filter ── search too long? ──► VALIDATION_ERROR          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_records(store.expenses(), spec, store.directory())             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ExpenseDto { ..., companyName }   (store order preserved)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizdesk_core::validation::validate_expense;
use bizdesk_core::{
    filter_records, CompanyDirectory, Expense, ExpenseDraft, ExpenseStatus, Money,
    PaymentMethod, RecordKind,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ensure_company;
use super::query::ListQuery;
use crate::error::ApiError;
use crate::state::StoreState;

/// Expense DTO for the UI.
///
/// `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    pub id: String,
    pub company_id: String,
    /// Resolved name, or "Unknown Company" when the company was deleted.
    pub company_name: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub project: Option<String>,
    pub status: ExpenseStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
}

impl ExpenseDto {
    pub fn new(e: Expense, directory: &CompanyDirectory<'_>) -> Self {
        ExpenseDto {
            company_name: directory.name_of(&e.company_id).to_string(),
            id: e.id,
            company_id: e.company_id,
            amount: e.amount,
            date: e.date,
            description: e.description,
            category: e.category,
            project: e.project,
            status: e.status,
            payment_date: e.payment_date,
            payment_method: e.payment_method,
        }
    }
}

/// Expense form contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub company_id: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub status: ExpenseStatus,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl ExpenseInput {
    fn into_draft(self) -> ExpenseDraft {
        ExpenseDraft {
            company_id: self.company_id,
            amount: self.amount,
            date: self.date,
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            project: self.project.filter(|p| !p.trim().is_empty()),
            status: self.status,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
        }
    }
}

pub fn list_expenses(store: &StoreState, query: &ListQuery) -> Result<Vec<ExpenseDto>, ApiError> {
    let spec = query.to_filter()?;
    store.with_store(|s| {
        let directory = s.directory();
        let rows: Vec<ExpenseDto> = filter_records(s.expenses(), &spec, &directory)
            .into_iter()
            .map(|e| ExpenseDto::new(e, &directory))
            .collect();
        debug!(total = s.expenses().len(), shown = rows.len(), "list_expenses command");
        Ok(rows)
    })
}

pub fn get_expense(store: &StoreState, id: &str) -> Result<ExpenseDto, ApiError> {
    debug!(id = %id, "get_expense command");
    store.with_store(|s| {
        let expense = s
            .get_expense(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(RecordKind::Expense, id))?;
        Ok(ExpenseDto::new(expense, &s.directory()))
    })
}

pub fn create_expense(store: &StoreState, input: ExpenseInput) -> Result<ExpenseDto, ApiError> {
    debug!(company_id = %input.company_id, "create_expense command");
    let draft = input.into_draft();
    validate_expense(&draft)?;

    store.with_store_mut(|s| {
        ensure_company(s, &draft.company_id)?;
        let expense = s.create_expense(draft);
        Ok(ExpenseDto::new(expense, &s.directory()))
    })
}

pub fn update_expense(
    store: &StoreState,
    id: &str,
    input: ExpenseInput,
) -> Result<ExpenseDto, ApiError> {
    debug!(id = %id, "update_expense command");
    let draft = input.into_draft();
    validate_expense(&draft)?;

    store.with_store_mut(|s| {
        ensure_company(s, &draft.company_id)?;
        let expense = draft.into_expense(id.to_string());
        s.update_expense(expense.clone())?;
        Ok(ExpenseDto::new(expense, &s.directory()))
    })
}

pub fn delete_expense(store: &StoreState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_expense command");
    store.with_store_mut(|s| s.delete_expense(id))?;
    Ok(())
}

/// The `limit` most recent expenses by date, newest first. Expenses on the
/// same date keep store order.
pub fn recent_expenses(store: &StoreState, limit: usize) -> Vec<ExpenseDto> {
    store.with_store(|s| {
        let directory = s.directory();
        let mut expenses = s.expenses().to_vec();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
            .into_iter()
            .take(limit)
            .map(|e| ExpenseDto::new(e, &directory))
            .collect()
    })
}

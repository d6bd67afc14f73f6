//! # Invoice Commands
//!
//! Invoices store their line items, tax, discount and paid amount. Every
//! total in [`InvoiceDto`] is computed from those when the DTO is built:
//!
//! ```text
//! item.amount   = quantity × unitPrice
//! subtotal      = Σ item.amount
//! totalAmount   = subtotal + tax − discount
//! balanceDue    = totalAmount − paidAmount
//! ```

use bizdesk_core::validation::validate_invoice;
use bizdesk_core::{
    filter_records, CompanyDirectory, Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus, Money,
    RecordKind,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ensure_company;
use super::query::ListQuery;
use crate::error::ApiError;
use crate::state::StoreState;

/// One invoice line for the UI. Amounts in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemDto {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub amount: Money,
}

impl From<&InvoiceItem> for InvoiceItemDto {
    fn from(item: &InvoiceItem) -> Self {
        InvoiceItemDto {
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            amount: item.amount(),
        }
    }
}

/// Invoice DTO for the UI. Amounts in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItemDto>,
    pub subtotal: Money,
    pub tax: Money,
    pub discount: Money,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub balance_due: Money,
    pub notes: Option<String>,
}

impl InvoiceDto {
    pub fn new(invoice: Invoice, directory: &CompanyDirectory<'_>) -> Self {
        InvoiceDto {
            company_name: directory.name_of(&invoice.company_id).to_string(),
            items: invoice.items.iter().map(InvoiceItemDto::from).collect(),
            subtotal: invoice.subtotal(),
            total_amount: invoice.total_amount(),
            balance_due: invoice.balance_due(),
            id: invoice.id,
            company_id: invoice.company_id,
            invoice_number: invoice.invoice_number,
            date: invoice.date,
            due_date: invoice.due_date,
            status: invoice.status,
            tax: invoice.tax,
            discount: invoice.discount,
            paid_amount: invoice.paid_amount,
            notes: invoice.notes,
        }
    }
}

/// One line of the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemInput {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Money,
}

/// Invoice form contents.
///
/// Leave `invoiceNumber` empty to have one generated on create, or to keep
/// the current one on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    pub company_id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItemInput>,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub discount: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub paid_amount: Money,
}

impl InvoiceInput {
    fn into_draft(self) -> InvoiceDraft {
        InvoiceDraft {
            company_id: self.company_id,
            invoice_number: self.invoice_number,
            date: self.date,
            due_date: self.due_date,
            status: self.status,
            items: self
                .items
                .into_iter()
                .map(|i| InvoiceItem::new(i.description.trim(), i.quantity, i.unit_price))
                .collect(),
            tax: self.tax,
            discount: self.discount,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            paid_amount: self.paid_amount,
        }
    }
}

pub fn list_invoices(store: &StoreState, query: &ListQuery) -> Result<Vec<InvoiceDto>, ApiError> {
    let spec = query.to_filter()?;
    store.with_store(|s| {
        let directory = s.directory();
        let rows: Vec<InvoiceDto> = filter_records(s.invoices(), &spec, &directory)
            .into_iter()
            .map(|i| InvoiceDto::new(i, &directory))
            .collect();
        debug!(total = s.invoices().len(), shown = rows.len(), "list_invoices command");
        Ok(rows)
    })
}

pub fn get_invoice(store: &StoreState, id: &str) -> Result<InvoiceDto, ApiError> {
    debug!(id = %id, "get_invoice command");
    store.with_store(|s| {
        let invoice = s
            .get_invoice(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(RecordKind::Invoice, id))?;
        Ok(InvoiceDto::new(invoice, &s.directory()))
    })
}

pub fn create_invoice(store: &StoreState, input: InvoiceInput) -> Result<InvoiceDto, ApiError> {
    debug!(company_id = %input.company_id, "create_invoice command");
    let draft = input.into_draft();
    validate_invoice(&draft)?;

    store.with_store_mut(|s| {
        ensure_company(s, &draft.company_id)?;
        let invoice = s.create_invoice(draft);
        Ok(InvoiceDto::new(invoice, &s.directory()))
    })
}

pub fn update_invoice(
    store: &StoreState,
    id: &str,
    input: InvoiceInput,
) -> Result<InvoiceDto, ApiError> {
    debug!(id = %id, "update_invoice command");
    let draft = input.into_draft();
    validate_invoice(&draft)?;

    store.with_store_mut(|s| {
        let current_number = s
            .get_invoice(id)
            .map(|i| i.invoice_number.clone())
            .ok_or_else(|| ApiError::not_found(RecordKind::Invoice, id))?;
        ensure_company(s, &draft.company_id)?;

        let number = draft
            .supplied_number()
            .map(str::to_string)
            .unwrap_or(current_number);
        let invoice = draft.into_invoice(id.to_string(), number);
        s.update_invoice(invoice.clone())?;
        Ok(InvoiceDto::new(invoice, &s.directory()))
    })
}

pub fn delete_invoice(store: &StoreState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_invoice command");
    store.with_store_mut(|s| s.delete_invoice(id))?;
    Ok(())
}

//! # CSV Export
//!
//! Serializes a (usually filtered) list view to CSV with a fixed column
//! order per record kind. Rows come out in the order they are given, so the
//! file matches what the user sees on screen.
//!
//! | Kind     | Columns                                                        |
//! |----------|----------------------------------------------------------------|
//! | Expense  | Date, Company, Description, Category, Project, Amount, Status |
//! | Invoice  | Invoice Number, Company, Date, Due Date, Amount, Paid, Status |
//!
//! Amounts are plain decimals (`1234.50`) and dates are `YYYY-MM-DD`.

use crate::directory::CompanyDirectory;
use crate::error::{CoreError, CoreResult};
use crate::types::{Expense, Invoice};

pub const EXPENSE_COLUMNS: [&str; 7] = [
    "Date",
    "Company",
    "Description",
    "Category",
    "Project",
    "Amount",
    "Status",
];

pub const INVOICE_COLUMNS: [&str; 7] = [
    "Invoice Number",
    "Company",
    "Date",
    "Due Date",
    "Amount",
    "Paid",
    "Status",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes expenses as CSV, header first.
pub fn expenses_to_csv(expenses: &[Expense], directory: &CompanyDirectory<'_>) -> CoreResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPENSE_COLUMNS)?;

    for expense in expenses {
        writer.write_record([
            expense.date.format(DATE_FORMAT).to_string().as_str(),
            directory.name_of(&expense.company_id),
            expense.description.as_str(),
            expense.category.as_str(),
            expense.project.as_deref().unwrap_or(""),
            expense.amount.to_decimal_string().as_str(),
            expense.status.as_str(),
        ])?;
    }

    finish(writer)
}

/// Writes invoices as CSV, header first. `Amount` is the derived total.
pub fn invoices_to_csv(invoices: &[Invoice], directory: &CompanyDirectory<'_>) -> CoreResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(INVOICE_COLUMNS)?;

    for invoice in invoices {
        writer.write_record([
            invoice.invoice_number.as_str(),
            directory.name_of(&invoice.company_id),
            invoice.date.format(DATE_FORMAT).to_string().as_str(),
            invoice.due_date.format(DATE_FORMAT).to_string().as_str(),
            invoice.total_amount().to_decimal_string().as_str(),
            invoice.paid_amount.to_decimal_string().as_str(),
            invoice.status.as_str(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> CoreResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Export(e.to_string()))
}

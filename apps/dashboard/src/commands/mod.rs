//! # Commands Module
//!
//! Everything the dashboard UI can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── query.rs      ◄─── Filter bar → FilterSpec
//! ├── company.rs    ◄─── Company CRUD
//! ├── expense.rs    ◄─── Expense list/CRUD, recent expenses
//! ├── invoice.rs    ◄─── Invoice list/CRUD with derived totals
//! ├── dashboard.rs  ◄─── Dashboard summary
//! ├── export.rs     ◄─── CSV export of filtered lists
//! └── config.rs     ◄─── Display settings
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI: listExpenses({ status: 'pending', searchQuery: '' })              │
//! │         │                                                               │
//! │         │ (JSON, camelCase)                                             │
//! │         ▼                                                               │
//! │  fn list_expenses(                                                      │
//! │      store: &StoreState,      ◄── explicit handle, no global store     │
//! │      query: &ListQuery,       ◄── deserialized request                 │
//! │  ) -> Result<Vec<ExpenseDto>, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI receives: ExpenseDto[]  or  { code, message }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands validate their input with `bizdesk_core::validation`
//! before touching the store.

pub mod company;
pub mod config;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod invoice;
pub mod query;

use bizdesk_core::RecordKind;
use bizdesk_store::RecordStore;

use crate::error::ApiError;

pub use query::ListQuery;

/// New and edited expenses and invoices must point at an existing company.
fn ensure_company(store: &RecordStore, company_id: &str) -> Result<(), ApiError> {
    if store.get_company(company_id).is_none() {
        return Err(ApiError::not_found(RecordKind::Company, company_id));
    }
    Ok(())
}

//! # bizdesk-core: Ledger Logic for Bizdesk
//!
//! Record types, filtering, aggregation and export for the small-business
//! ledger. Every function here is a pure function over slices of records;
//! storage lives in `bizdesk-store` and the session layer in `bizdesk-app`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bizdesk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard UI (TypeScript)                    │   │
//! │  │   Companies ──► Expenses ──► Invoices ──► Dashboard / Export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (JSON DTOs)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bizdesk-app (session layer)                  │   │
//! │  │   list_expenses, create_invoice, get_dashboard, export_*, ...   │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │   ★ bizdesk-core (THIS CRATE) ★ │  │  bizdesk-store            │    │
//! │  │                                 │  │  in-memory collections,   │    │
//! │  │  types   filter   aggregate     │◄─┤  ids, invoice numbering,  │    │
//! │  │  money   view     export        │  │  mock seed data           │    │
//! │  │  validation  invoice_number     │  └───────────────────────────┘    │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO SHARED STATE       │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Company, Expense, Invoice and their drafts
//! - [`money`] - Integer-cent money type
//! - [`directory`] - Company id to name lookup
//! - [`filter`] - List view filtering (company, status, dates, search)
//! - [`aggregate`] - Totals, per-company breakdown, monthly series
//! - [`view`] - Dashboard shaping (top companies, paid/pending split)
//! - [`export`] - CSV export of list views
//! - [`invoice_number`] - `INV-YYYYMM-RRR` generation
//! - [`validation`] - Form rules checked before a store mutation
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bizdesk_core::aggregate::expense_totals;
//! use bizdesk_core::{ExpenseDraft, ExpenseStatus, Money};
//! use chrono::NaiveDate;
//!
//! let draft = ExpenseDraft {
//!     company_id: "company-1".to_string(),
//!     amount: Money::from_cents(1099),
//!     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!     description: "Paper".to_string(),
//!     category: "Office".to_string(),
//!     project: None,
//!     status: ExpenseStatus::Pending,
//!     payment_date: None,
//!     payment_method: None,
//! };
//! let expenses = vec![draft.into_expense("expense-1".to_string())];
//!
//! let totals = expense_totals(&expenses);
//! assert_eq!(totals.pending.to_string(), "$10.99");
//! assert_eq!(totals.total, totals.paid + totals.pending);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod directory;
pub mod error;
pub mod export;
pub mod filter;
pub mod invoice_number;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use directory::CompanyDirectory;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{filter_records, FilterSpec, StatusFilter};
pub use money::Money;
pub use types::*;
pub use view::DashboardSummary;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display name for an expense or invoice whose company no longer exists.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// How many companies the dashboard bar chart shows by default.
pub const DEFAULT_TOP_COMPANIES: usize = 5;

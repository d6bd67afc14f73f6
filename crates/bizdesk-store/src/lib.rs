//! # bizdesk-store: Record Store for Bizdesk
//!
//! Holds companies, expenses and invoices in memory and performs every
//! mutation on them. Filtering and totals are computed by `bizdesk-core`
//! over the slices this crate hands out.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bizdesk Data Flow                                │
//! │                                                                         │
//! │  bizdesk-app command (create_expense, list_invoices, ...)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bizdesk-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RecordStore  │    │  Collection   │    │    seed      │  │   │
//! │  │   │  (store.rs)   │───►│ (ordered Vec) │    │  demo books  │  │   │
//! │  │   │  ids, numbers │    │  per kind     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  &[Company] / &[Expense] / &[Invoice] ──► bizdesk-core filter/aggregate │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The record store
//! - [`collection`] - Ordered per-kind collections
//! - [`seed`] - Demo data
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::{Collection, Record};
pub use error::{StoreError, StoreResult};
pub use store::{RecordStore, MAX_NUMBER_ATTEMPTS};

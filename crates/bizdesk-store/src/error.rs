//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  RecordStore::update_* / delete_* with an unknown id                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in bizdesk-app) ← Serialized for the dashboard UI           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizdesk_core::RecordKind;
use thiserror::Error;

/// Record store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record of this kind has the given id.
    ///
    /// ## When This Occurs
    /// - Updating a record that was deleted in the meantime
    /// - Deleting the same record twice
    ///
    /// The collection is left exactly as it was.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

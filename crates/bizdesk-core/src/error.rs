//! # Error Types
//!
//! Domain-specific error types for bizdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bizdesk-core errors (this file)                                       │
//! │  ├── CoreError        - Export failures, wrapped validation            │
//! │  └── ValidationError  - Form input that breaks a record rule           │
//! │                                                                         │
//! │  bizdesk-store errors (separate crate)                                 │
//! │  └── StoreError       - Update/delete of an id that does not exist     │
//! │                                                                         │
//! │  App errors (apps/dashboard)                                           │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ──┐                                 │
//! │                         StoreError ──┴──► ApiError → UI                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering and aggregation have no error paths: an unknown status simply
//! matches nothing, and a missing company resolves to "Unknown Company".

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by bizdesk-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Writing CSV rows failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Export(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a draft reaches the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be at least a given minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value exceeds the largest accepted value.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: String },

    /// Invalid format (e.g., email without a domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A date falls before the date it must follow.
    #[error("{field} must not be before {other}")]
    DateOrder { field: String, other: String },

    /// A field may only be set in a certain state.
    #[error("{field} is only allowed when {condition}")]
    NotAllowed { field: String, condition: String },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn negative(field: &str) -> Self {
        ValidationError::Negative {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

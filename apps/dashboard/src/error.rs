//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bizdesk                                │
//! │                                                                         │
//! │  Command Function  ──  Result<T, ApiError>                             │
//! │         │                                                               │
//! │         ├── ValidationError ("amount must not be negative")            │
//! │         │        └──────────────────────────► VALIDATION_ERROR         │
//! │         │                                                               │
//! │         ├── StoreError::NotFound { kind, id }                          │
//! │         │        └──────────────────────────► NOT_FOUND                │
//! │         │                                                               │
//! │         ├── CoreError::Export (CSV writer)                             │
//! │         │        └──────────────────────────► EXPORT_ERROR             │
//! │         │                                                               │
//! │         └── Success ───────────────────────► DTO (camelCase JSON)      │
//! │                                                                         │
//! │  UI side:                                                               │
//! │    catch (e) { if (e.code === 'NOT_FOUND') refreshList(); }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizdesk_core::{CoreError, RecordKind, ValidationError};
use bizdesk_store::StoreError;
use serde::Serialize;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Invoice not found: invoice-1f0c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// CSV export failed
    ExportError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(kind: RecordKind, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", kind, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => ApiError::not_found(kind, &id),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::Export(e) => {
                tracing::error!("CSV export failed: {}", e);
                ApiError::new(ErrorCode::ExportError, "Could not export the list")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "topping bacon"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::from_str ── unknown verb? ── ApiError::invalid_command ──┐    │
//! │         │                                                          │    │
//! │         ▼                                                          ▼    │
//! │  configurator.toggle_topping() ── CoreError ── ApiError ──► "error[..]" │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──► re-render                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` is serializable so the same `{code, message}` shape can be
//! handed to a web front end.

use std::fmt;

use pizza_core::CoreError;
use serde::Serialize;

use crate::catalog::CatalogError;

/// Error returned from commands.
///
/// ```json
/// { "code": "TOPPING_LIMIT", "message": "This pizza can have at most 5 toppings" }
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
    /// Id not present in the catalog
    NotFound,

    /// Topping cap reached, or size too small for the chosen toppings
    ToppingLimit,

    /// Toppings picked before a size
    SizeRequired,

    /// Input line could not be parsed
    InvalidCommand,

    /// Catalog could not be read
    CatalogError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::UnknownSize(_) | CoreError::UnknownCrust(_) | CoreError::UnknownTopping(_) => {
                ErrorCode::NotFound
            }
            CoreError::ToppingLimitReached { .. } | CoreError::SizeTooSmall { .. } => {
                ErrorCode::ToppingLimit
            }
            CoreError::SizeNotSelected => ErrorCode::SizeRequired,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts catalog loading errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

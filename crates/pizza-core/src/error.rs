//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                          │
//! │  ├── CoreError        - Rejected selections (lookup miss, topping cap)  │
//! │  └── ValidationError  - Malformed catalog entries                       │
//! │                                                                         │
//! │  pizza-terminal errors (app)                                            │
//! │  ├── CatalogError     - Reading catalog files                           │
//! │  └── ApiError         - What the user sees (code + message)             │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → Loadable::Failed                │
//! │        CoreError → ApiError → terminal                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The step gate ("select a size first") is not an error type: it is stored
//! in `SelectionState::validation_error` and shown until dismissed.
//!
//! Every `CoreError` leaves the order exactly as it was before the call.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// A selection the configurator refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The size id is not in the loaded catalog.
    #[error("Size not found: {0}")]
    UnknownSize(String),

    /// The crust id is not in the loaded catalog.
    #[error("Crust not found: {0}")]
    UnknownCrust(String),

    /// The topping id has no selection flag (unknown, or toppings not loaded).
    #[error("Topping not found: {0}")]
    UnknownTopping(String),

    /// Toppings are chosen against a size's cap, so a size comes first.
    #[error("Please select pizza size before choosing toppings.")]
    SizeNotSelected,

    /// Selecting one more topping would exceed the size's ingredient cap.
    ///
    /// ## User Workflow
    /// ```text
    /// Medium pizza (max 5), 5 toppings chosen
    ///      │
    ///      ▼
    /// toggle "olives" on
    ///      │
    ///      ▼
    /// ToppingLimitReached { max: 5 }  (olives stays off)
    /// ```
    #[error("This pizza can have at most {max} toppings")]
    ToppingLimitReached { max: u32 },

    /// The requested size cannot hold the toppings already chosen.
    #[error("{size} allows {max} toppings but {selected} are selected")]
    SizeTooSmall {
        size: String,
        max: u32,
        selected: usize,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. whitespace inside an id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two toppings with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for agri-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  agri-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  agri-store errors (separate crate)                                    │
//! │  └── StoreError       - NotFound / Validation / Failure                │
//! │                                                                         │
//! │  agri-client (fetch state)                                             │
//! │  └── message only     - What the view renders                          │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → FetchState.error → View          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain logic errors that are not tied to a single input field.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A filter or selection value could not be parsed.
    ///
    /// ## When This Occurs
    /// - A status dropdown sends a value outside the enum ("archived")
    /// - A config file names an unknown price band
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: String, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an UnknownValue error.
    pub fn unknown(kind: impl Into<String>, value: impl Into<String>) -> Self {
        CoreError::UnknownValue {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a draft or merged record doesn't meet requirements.
/// The store runs validation before any collection is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., farmer code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// A stock movement would take the stock below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock Out (qty: 60) on item with 45 liters
    ///      │
    ///      ▼
    /// BelowZero { available: 45, requested: 60 }
    ///      │
    ///      ▼
    /// UI shows: "Cannot reduce stock below zero"
    /// ```
    #[error("Cannot reduce stock below zero: available {available}, requested {requested}")]
    BelowZero { available: f64, requested: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Application Error Type
//!
//! Unified error type for the dashboard binary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run(args)                                                              │
//! │     │                                                                   │
//! │     ├── bad flag / bad value ────────────► AppError::Usage              │
//! │     ├── config file unreadable ──────────► AppError::Io                 │
//! │     ├── config file malformed ───────────► AppError::Toml               │
//! │     ├── config out of range ─────────────► AppError::Config             │
//! │     ├── resource settled as Failed ──────► AppError::Fetch              │
//! │     ├── store operation rejected ────────► AppError::Store              │
//! │     └── overview serialization ──────────► AppError::Json               │
//! │                                                                         │
//! │  main() prints the message and exits with a failure code               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use agri_store::StoreError;

/// Errors that stop the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown flag or missing flag value.
    #[error("{0}")]
    Usage(String),

    /// Configuration loaded but not acceptable.
    ///
    /// ## When This Occurs
    /// - `latency_scale` negative or not finite
    /// - a page size of 0 or above 100
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A store operation was rejected.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A resource finished in the failed state.
    #[error("Failed to load {resource}: {message}")]
    Fetch { resource: &'static str, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Failed to serialize overview: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the dashboard.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }
}

//! Error types for gselect
//!
//! Uses `thiserror` for library errors. Catalog failures have their own
//! type in [`crate::domain::ports::CatalogError`] and are recovered inside
//! tree construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gselect operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Main error type for gselect operations
#[derive(Error, Debug)]
pub enum SelectError {
    /// Invalid TOML in a config or catalog fixture file
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A selection text did not match any selectable element
    #[error("no selectable element named '{0}'")]
    UnknownElement(String),
}

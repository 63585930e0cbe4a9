//! Catalog-specific error types
//!
//! The catalog itself never fails once built. These errors cover building
//! it: reading a catalog file at start-up and validating its records.
//!
//! # Error Types
//!
//! - **`IoError`**: The catalog file could not be read
//! - **`ParseError`**: The file contents are not a valid recipe list
//! - **`UnsupportedFormat`**: The file extension is neither `.json` nor `.toml`
//! - **`DuplicateId`** / **`UnknownCategory`**: Record-level validation failures

use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file could not be parsed
    #[error("Error while parsing catalog: {0}")]
    ParseError(String),

    /// Catalog file extension not recognised
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Two recipes share an id
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    /// Recipe category is not one of the selector labels
    #[error("Recipe {id} has unknown category '{category}'")]
    UnknownCategory {
        /// Offending recipe
        id: u32,
        /// Category label as found in the file
        category: String,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

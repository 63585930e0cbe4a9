//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Scripted browse referenced a recipe that is not in the catalog
    #[error("Recipe {0} is not in the catalog")]
    UnknownRecipe(u32),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

//! Error types for the menu crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors that can occur while decoding menu and store documents.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Document is not valid JSON or has an unknown shape
    #[error("Invalid menu document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Menu item carries a negative price
    #[error("Invalid price {price} for menu item {name:?}")]
    InvalidPrice {
        /// Item name as it appeared in the document
        name: String,
        /// Offending price
        price: Decimal,
    },
}

/// Error code for integration with ordertaker-core error handling.
/// Range: 11xxx for menu errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuErrorCode {
    /// Document is not valid JSON or has an unknown shape
    InvalidDocument = 11001,
    /// Menu item carries a negative price
    InvalidPrice = 11002,
}

impl MenuError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MenuErrorCode {
        match self {
            MenuError::InvalidDocument(_) => MenuErrorCode::InvalidDocument,
            MenuError::InvalidPrice { .. } => MenuErrorCode::InvalidPrice,
        }
    }
}

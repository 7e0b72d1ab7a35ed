//! Commerce error types.
//!
//! Cart transitions are total and never produce these; errors only come
//! from catalog loading, action parsing and navigation.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur at the storefront boundaries.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A product id could not be parsed.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// A cart action could not be parsed.
    #[error("Invalid cart action: {0}")]
    InvalidAction(String),

    /// Navigation to a screen that is not reachable from the current one.
    #[error("Invalid navigation from {from} to {to}")]
    InvalidNavigation { from: String, to: String },

    /// Back navigation with nothing left to pop.
    #[error("Navigation history is empty")]
    EmptyHistory,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}

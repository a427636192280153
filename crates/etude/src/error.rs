//! Error types for etude

use thiserror::Error;

/// Core error type for etude operations
///
/// Display messages are part of the contract: consumers match on the text
/// as well as the variant.
#[derive(Debug, Error)]
pub enum Error {
    /// Pop or peek on a stack with no elements
    #[error("stack is empty")]
    EmptyStack,

    /// Price rejected by a pricing operation
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// User input rejected by validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Product rejected by validation
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// Country code with no configured driving rule
    #[error("invalid country code: {0}")]
    UnknownCountry(String),
}

/// Result type alias for etude operations
pub type Result<T> = std::result::Result<T, Error>;

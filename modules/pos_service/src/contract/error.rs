//! Contract error types for the POS service
//!
//! These errors are transport-agnostic; the REST layer maps them to HTTP
//! Problem Details.

use thiserror::Error;

/// POS service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PosError {
    /// Missing or invalid input
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Entity missing or no rows affected
    #[error("{message}")]
    NotFound {
        /// Resource type (product, order)
        resource: &'static str,
        /// Human-readable explanation
        message: String,
    },

    /// Order item references a product that does not exist
    #[error("Product not found for order item: {product_name}")]
    ReferentialIntegrity {
        /// Name submitted by the client
        product_name: String,
    },

    /// Cache layer failed with something other than a miss
    #[error("Cache unavailable: {message}")]
    CacheUnavailable {
        /// Underlying cache error
        message: String,
    },

    /// Product image could not be read while building the listing
    #[error("Failed to read image '{path}': {message}")]
    ImageUnavailable {
        /// Stored image path
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Any other persistent store failure
    #[error("Store error: {message}")]
    Store {
        /// Underlying database error
        message: String,
    },

    /// Unknown user or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl PosError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn store(error: impl std::fmt::Display) -> Self {
        Self::Store {
            message: error.to_string(),
        }
    }

    pub fn order_not_found() -> Self {
        Self::NotFound {
            resource: "order",
            message: "No order found with the given ID".to_string(),
        }
    }

    pub fn product_not_found() -> Self {
        Self::NotFound {
            resource: "product",
            message: "Product not found".to_string(),
        }
    }
}

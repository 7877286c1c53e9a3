//! Cache layer abstraction used by the catalog
//!
//! A miss is `Ok(None)`; `Err` always means the cache itself failed.

use async_trait::async_trait;
use thiserror::Error;

/// Key holding the serialized product listing
pub const PRODUCTS_CACHE_KEY: &str = "products";

/// Transport-level cache failure
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CacheError(pub String);

/// Key-value store holding JSON text
#[async_trait]
pub trait CacheLayer: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

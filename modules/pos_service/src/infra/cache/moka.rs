//! In-process cache layer backed by moka

use crate::domain::{CacheError, CacheLayer};
use async_trait::async_trait;
use moka::future::{Cache, CacheBuilder};
use std::time::Duration;

/// Moka-backed [`CacheLayer`]
///
/// Entries live until invalidated unless a TTL is configured.
pub struct MokaCacheLayer {
    inner: Cache<String, String>,
}

impl MokaCacheLayer {
    pub fn new(max_capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = CacheBuilder::new(max_capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            inner: builder.build(),
        }
    }
}

#[async_trait]
impl CacheLayer for MokaCacheLayer {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.inner.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.inner.invalidate(key).await;
        Ok(())
    }
}

//! Configuration for the POS service module

use serde::{Deserialize, Serialize};

/// What the catalog listing does when a product image cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFailurePolicy {
    /// Fail the whole listing
    #[default]
    Fail,
    /// Substitute a placeholder image for the failing product
    Placeholder,
}

/// POS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Origin allowed by CORS
    #[serde(default = "default_cors_allowed_origin")]
    pub cors_allowed_origin: String,

    /// Directory uploaded product images are written to
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Behaviour when a product image is unreadable during the catalog fill
    #[serde(default)]
    pub image_failure_policy: ImageFailurePolicy,

    /// Optional TTL for the catalog listing (none = until invalidated)
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,

    /// Maximum number of cache entries
    #[serde(default = "default_cache_max_capacity")]
    pub cache_max_capacity: u64,

    /// bcrypt cost used for new accounts
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors_allowed_origin: default_cors_allowed_origin(),
            upload_dir: default_upload_dir(),
            image_failure_policy: ImageFailurePolicy::default(),
            cache_ttl_secs: None,
            cache_max_capacity: default_cache_max_capacity(),
            password_hash_cost: default_password_hash_cost(),
        }
    }
}

fn default_cors_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_cache_max_capacity() -> u64 {
    16
}

fn default_password_hash_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

//! Product image capability
//!
//! Uploads are written through an [`ImageStore`] and read back when the
//! catalog listing is built, where they are inlined as data URIs.

use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Prefix of every inlined image
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// 1x1 transparent PNG served when an image is unreadable and the
/// placeholder policy is active
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Uploaded image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client supplied file name
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// An upload with no name or no content carries no image
    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty() || self.bytes.is_empty()
    }
}

/// Blob storage for product images
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Read the image stored under `path`
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Persist an upload and return the path to store on the product
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String>;

    /// Delete a previously saved image
    async fn remove(&self, path: &str) -> Result<()>;
}

/// Encode image bytes as a `data:image/png;base64,...` URI
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(bytes))
}

/// Reduce a client supplied file name to its last path component
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

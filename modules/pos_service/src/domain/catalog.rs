//! Catalog service - product mutations and the read-through listing cache
//!
//! The listing lives under [`PRODUCTS_CACHE_KEY`] as JSON text. It is filled on
//! a miss and deleted after every committed product write; nothing else writes
//! that key.
//!
//! Every invalidation bumps a generation counter. A fill only writes its
//! listing if the generation it saw before reading the store is still current,
//! so a fill racing a product write cannot put the old listing back.

use super::cache::{CacheLayer, PRODUCTS_CACHE_KEY};
use super::images::{sanitize_file_name, to_data_uri, ImageStore, ImageUpload, PLACEHOLDER_PNG};
use super::repository::ProductRepository;
use super::validation::validate_product;
use crate::config::ImageFailurePolicy;
use crate::contract::{NewProduct, PosError, Product, ProductUpdate};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cached listing entry, image inlined as a data URI
#[derive(Debug, Serialize)]
struct CatalogEntry {
    id: i32,
    name: String,
    price: f64,
    image_url: String,
}

/// Domain service owning product writes and the catalog cache
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheLayer>,
    images: Arc<dyn ImageStore>,
    image_failure_policy: ImageFailurePolicy,
    /// Invalidation generation; held across fill writes and invalidations
    generation: Mutex<u64>,
}

impl CatalogService {
    /// Create a new service instance
    pub fn new(
        products: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheLayer>,
        images: Arc<dyn ImageStore>,
        image_failure_policy: ImageFailurePolicy,
    ) -> Self {
        Self {
            products,
            cache,
            images,
            image_failure_policy,
            generation: Mutex::new(0),
        }
    }

    // ===== Listing =====

    /// Product listing as JSON text.
    ///
    /// Warm: the cached text is returned verbatim. Cold: the listing is built
    /// from the store, cached without expiration and returned.
    pub async fn product_listing(&self) -> Result<String, PosError> {
        let seen = *self.generation.lock().await;

        match self.cache.get(PRODUCTS_CACHE_KEY).await {
            Ok(Some(cached)) => {
                tracing::debug!("Catalog cache hit");
                return Ok(cached);
            }
            Ok(None) => tracing::debug!("Catalog cache miss"),
            Err(e) => {
                return Err(PosError::CacheUnavailable {
                    message: e.to_string(),
                })
            }
        }

        let listing = self.build_listing().await?;

        let current = self.generation.lock().await;
        if *current != seen {
            tracing::debug!("Catalog changed during fill, listing not cached");
        } else if let Err(e) = self
            .cache
            .set(PRODUCTS_CACHE_KEY, listing.clone())
            .await
        {
            tracing::warn!(error = %e, "Failed to store catalog listing in cache");
        }
        drop(current);

        Ok(listing)
    }

    /// Drop the cached listing so the next read goes to the store
    pub async fn invalidate_product_listing(&self) -> Result<(), PosError> {
        let mut generation = self.generation.lock().await;
        *generation = generation.wrapping_add(1);

        self.cache
            .delete(PRODUCTS_CACHE_KEY)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Catalog cache invalidation failed after a committed write");
                PosError::CacheUnavailable {
                    message: format!("product change saved but cache invalidation failed: {}", e),
                }
            })
    }

    async fn build_listing(&self) -> Result<String, PosError> {
        let products = self
            .products
            .list_all()
            .await
            .map_err(PosError::store)?;

        let mut entries = Vec::with_capacity(products.len());
        for product in products {
            let image_url = self.inline_image(&product.image_url).await?;
            entries.push(CatalogEntry {
                id: product.id,
                name: product.name,
                price: product.price,
                image_url,
            });
        }

        serde_json::to_string(&entries).map_err(PosError::store)
    }

    async fn inline_image(&self, path: &str) -> Result<String, PosError> {
        match self.images.read(path).await {
            Ok(bytes) => Ok(to_data_uri(&bytes)),
            Err(e) => match self.image_failure_policy {
                ImageFailurePolicy::Fail => Err(PosError::ImageUnavailable {
                    path: path.to_string(),
                    message: e.to_string(),
                }),
                ImageFailurePolicy::Placeholder => {
                    tracing::warn!(path, error = %e, "Product image unreadable, using placeholder");
                    Ok(to_data_uri(PLACEHOLDER_PNG))
                }
            },
        }
    }

    // ===== Product Operations =====

    /// Get a single product with its stored image path
    pub async fn get_product(&self, id: i32) -> Result<Product, PosError> {
        self.products
            .find_by_id(id)
            .await
            .map_err(PosError::store)?
            .ok_or_else(PosError::product_not_found)
    }

    /// Store the image, insert the product and invalidate the listing
    pub async fn create_product(
        &self,
        name: String,
        price: f64,
        image: Option<ImageUpload>,
    ) -> Result<i32, PosError> {
        validate_product(&name, price)?;

        let image = image
            .filter(|upload| !upload.is_empty())
            .ok_or_else(|| PosError::validation("Product image is required"))?;
        let image_url = self.save_image(&image).await?;

        let id = match self
            .products
            .create(&NewProduct {
                name,
                price,
                image_url: image_url.clone(),
            })
            .await
        {
            Ok(id) => id,
            Err(e) => {
                self.discard_image(&image_url).await;
                return Err(PosError::store(e));
            }
        };

        self.invalidate_product_listing().await?;

        tracing::info!(product_id = id, "Product created");
        Ok(id)
    }

    /// Update name and price; replace the image only when a new one is given
    pub async fn update_product(
        &self,
        id: i32,
        name: String,
        price: f64,
        image: Option<ImageUpload>,
    ) -> Result<(), PosError> {
        validate_product(&name, price)?;

        let image_url = match image.filter(|upload| !upload.is_empty()) {
            Some(upload) => Some(self.save_image(&upload).await?),
            None => None,
        };

        let result = self
            .products
            .update(&ProductUpdate {
                id,
                name,
                price,
                image_url: image_url.clone(),
            })
            .await;

        let failure = match result {
            Ok(0) => Some(PosError::product_not_found()),
            Ok(_) => None,
            Err(e) => Some(PosError::store(e)),
        };
        if let Some(err) = failure {
            if let Some(path) = &image_url {
                self.discard_image(path).await;
            }
            return Err(err);
        }

        self.invalidate_product_listing().await?;

        tracing::info!(product_id = id, "Product updated");
        Ok(())
    }

    /// Delete a product; deleting an unknown id is not an error
    pub async fn delete_product(&self, id: i32) -> Result<(), PosError> {
        let affected = self
            .products
            .delete(id)
            .await
            .map_err(PosError::store)?;

        self.invalidate_product_listing().await?;

        tracing::info!(product_id = id, affected, "Product deleted");
        Ok(())
    }

    async fn save_image(&self, upload: &ImageUpload) -> Result<String, PosError> {
        let file_name = sanitize_file_name(&upload.file_name).ok_or_else(|| {
            PosError::validation(format!("Invalid image file name '{}'", upload.file_name))
        })?;

        self.images
            .save(&file_name, &upload.bytes)
            .await
            .map_err(|e| PosError::Store {
                message: format!("Image upload failed: {}", e),
            })
    }

    /// Remove an image whose product row was never written
    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.images.remove(path).await {
            tracing::warn!(path, error = %e, "Failed to remove orphaned product image");
        }
    }
}

//! Common test utilities: in-memory database, test doubles and a wired module

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use pos_service::domain::{CacheError, CacheLayer, ImageStore, PosServices};
use pos_service::infra::cache::MokaCacheLayer;
use pos_service::infra::storage::repositories::SeaOrmProductRepository;
use pos_service::domain::ProductRepository;
use pos_service::{Config, NewProduct, PosServiceModule};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// Fresh in-memory SQLite database with all migrations applied
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One connection, so every query sees the same in-memory database
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    PosServiceModule::default()
        .migrate(&db)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

/// Config with a cheap bcrypt cost
pub fn test_config() -> Config {
    Config {
        password_hash_cost: 4,
        ..Config::default()
    }
}

// ===== Image store =====

/// Image store keeping uploads in memory
#[derive(Default)]
pub struct MemoryImageStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
    reads: AtomicUsize,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an image at `path` as if uploaded earlier
    pub fn insert(&self, path: &str, bytes: &[u8]) {
        self.files.write().insert(path.to_string(), bytes.to_vec());
    }

    /// Drop an image behind the catalog's back
    pub fn evict(&self, path: &str) {
        self.files.write().remove(path);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such image: {}", path))
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let path = format!("uploads/{}", file_name);
        self.insert(&path, bytes);
        Ok(path)
    }

    async fn remove(&self, path: &str) -> anyhow::Result<()> {
        self.files
            .write()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("no such image: {}", path))
    }
}

/// Image store whose next read parks until released
#[derive(Default)]
pub struct GatedImageStore {
    pub inner: MemoryImageStore,
    armed: AtomicBool,
    entered: Notify,
    release: Notify,
}

impl GatedImageStore {
    /// Park the next read
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Wait until a read is parked
    pub async fn wait_parked(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ImageStore for GatedImageStore {
    async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.read(path).await
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
        self.inner.save(file_name, bytes).await
    }

    async fn remove(&self, path: &str) -> anyhow::Result<()> {
        ImageStore::remove(&self.inner, path).await
    }
}

// ===== Caches =====

/// Cache whose backend is down
pub struct FailingCache;

#[async_trait]
impl CacheLayer for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), CacheError> {
        Err(CacheError("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError("connection refused".to_string()))
    }
}

/// Cache that always misses and refuses writes
pub struct ReadOnlyMissCache;

#[async_trait]
impl CacheLayer for ReadOnlyMissCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), CacheError> {
        Err(CacheError("read-only replica".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }
}

// ===== Wired module =====

pub struct TestPos {
    pub db: Arc<DatabaseConnection>,
    pub module: PosServiceModule,
    pub services: Arc<PosServices>,
    pub images: Arc<MemoryImageStore>,
}

impl TestPos {
    /// Module on a fresh database with a moka cache
    pub async fn new() -> Self {
        Self::with_cache(test_config(), Arc::new(MokaCacheLayer::new(16, None))).await
    }

    pub async fn with_cache(config: Config, cache: Arc<dyn CacheLayer>) -> Self {
        let db = setup_db().await;
        let images = Arc::new(MemoryImageStore::new());

        let module = PosServiceModule::new(config);
        module
            .init_with(db.clone(), cache, images.clone())
            .expect("Failed to init module");
        let services = module.services().expect("Services not initialized");

        Self {
            db,
            module,
            services,
            images,
        }
    }

    /// Insert a product straight into the store, bypassing the catalog cache
    pub async fn seed_product(&self, name: &str, price: f64) -> i32 {
        let image_url = format!("uploads/{}.png", name.to_lowercase().replace(' ', "-"));
        self.images.insert(&image_url, name.as_bytes());

        SeaOrmProductRepository::new(self.db.clone())
            .create(&NewProduct {
                name: name.to_string(),
                price,
                image_url,
            })
            .await
            .expect("Failed to seed product")
    }
}

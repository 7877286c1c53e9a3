//! Module declaration and lifecycle: configuration, wiring, migrations, routes

use crate::config::Config;
use crate::domain::{
    AccountService, CacheLayer, CatalogService, DashboardService, ImageStore, OrderService,
    PosServices,
};
use crate::infra::cache::MokaCacheLayer;
use crate::infra::images::FsImageStore;
use crate::infra::storage::repositories::{
    SeaOrmOrderRepository, SeaOrmProductRepository, SeaOrmStatsRepository, SeaOrmUserRepository,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

/// POS service module
pub struct PosServiceModule {
    config: RwLock<Config>,
    services: RwLock<Option<Arc<PosServices>>>,
}

impl Default for PosServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PosServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            services: RwLock::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Wire services with the in-process cache and the upload directory
    pub fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let cfg = self.config();

        let cache = Arc::new(MokaCacheLayer::new(
            cfg.cache_max_capacity,
            cfg.cache_ttl_secs.map(Duration::from_secs),
        ));
        let images = Arc::new(FsImageStore::new(&cfg.upload_dir));

        self.init_with(db, cache, images)
    }

    /// Wire services with caller-supplied cache and image store
    pub fn init_with(
        &self,
        db: Arc<DatabaseConnection>,
        cache: Arc<dyn CacheLayer>,
        images: Arc<dyn ImageStore>,
    ) -> Result<()> {
        let cfg = self.config();

        // Build repositories
        let order_repo = Arc::new(SeaOrmOrderRepository::new(db.clone()));
        let product_repo = Arc::new(SeaOrmProductRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let stats_repo = Arc::new(SeaOrmStatsRepository::new(db));

        let services = Arc::new(PosServices {
            orders: OrderService::new(order_repo),
            catalog: CatalogService::new(product_repo, cache, images, cfg.image_failure_policy),
            accounts: AccountService::new(user_repo, cfg.password_hash_cost),
            dashboard: DashboardService::new(stats_repo),
        });
        *self.services.write() = Some(services);

        tracing::info!(
            upload_dir = %cfg.upload_dir,
            image_failure_policy = ?cfg.image_failure_policy,
            cache_ttl_secs = ?cfg.cache_ttl_secs,
            "POS service initialized"
        );
        Ok(())
    }

    pub fn services(&self) -> Result<Arc<PosServices>> {
        self.services
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("POS service migrations completed");
        Ok(())
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let services = self.services()?;
        let origin = self.config.read().cors_allowed_origin.clone();

        tracing::info!(cors_allowed_origin = %origin, "Registering POS REST routes");
        crate::api::rest::routes::register_routes(router, services, &origin)
    }
}

//! Domain layer - business logic and services

pub mod accounts;
pub mod cache;
pub mod catalog;
pub mod dashboard;
pub mod images;
pub mod orders;
pub mod repository;
pub mod validation;

pub use accounts::AccountService;
pub use cache::{CacheError, CacheLayer, PRODUCTS_CACHE_KEY};
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use images::{ImageStore, ImageUpload};
pub use orders::OrderService;
pub use repository::{
    OrderInsert, OrderRepository, ProductRepository, StatsRepository, UserRepository,
};

/// Services shared by every request handler
pub struct PosServices {
    pub orders: OrderService,
    pub catalog: CatalogService,
    pub accounts: AccountService,
    pub dashboard: DashboardService,
}

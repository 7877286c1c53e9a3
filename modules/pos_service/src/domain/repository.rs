//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    NewOrder, NewProduct, Order, OrderStatus, Product, ProductUpdate, TopSeller, User,
};
use anyhow::Result;
use async_trait::async_trait;

/// Outcome of the order creation transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderInsert {
    /// Header and all details committed
    Created(i32),
    /// An item named a product that does not exist; the transaction was rolled back
    UnknownProduct(String),
}

/// Repository for orders and their details
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order header and one detail per item in a single transaction
    async fn create_with_details(&self, order: &NewOrder) -> Result<OrderInsert>;

    /// Set the status unconditionally, returning the affected row count
    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<u64>;

    /// Orders in any of the given statuses, ascending by id, details embedded
    async fn list_by_status(&self, statuses: &[OrderStatus]) -> Result<Vec<Order>>;

    /// Hard delete, returning the affected row count
    async fn delete(&self, id: i32) -> Result<u64>;
}

/// Repository for catalog products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ascending by id
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Insert and return the store-assigned id
    async fn create(&self, product: &NewProduct) -> Result<i32>;

    /// Update name and price; the image only when a non-empty one is given.
    /// Returns the affected row count.
    async fn update(&self, update: &ProductUpdate) -> Result<u64>;

    /// Returns the affected row count
    async fn delete(&self, id: i32) -> Result<u64>;
}

/// Repository for staff accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; `false` when the username is already taken
    async fn create(&self, user: &User) -> Result<bool>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Read-only aggregates for the dashboard
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Product with the highest summed detail quantity
    async fn top_seller(&self) -> Result<Option<TopSeller>>;

    /// Sum of `total_price` over orders with the given status
    async fn revenue(&self, status: OrderStatus) -> Result<f64>;

    async fn count_products(&self) -> Result<u64>;

    async fn count_orders(&self, status: OrderStatus) -> Result<u64>;

    async fn count_users_with_role(&self, role: &str) -> Result<u64>;
}

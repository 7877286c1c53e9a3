//! POS Service Module
//!
//! Point-of-sale backend: product catalog with a read-through listing cache,
//! orders with transactional line items, staff accounts and dashboard counters.

// Public exports
pub mod contract;
pub use contract::{
    error::PosError, NewOrder, NewProduct, Order, OrderDetail, OrderItem, OrderStatus, Product,
    ProductUpdate, StatusFilter,
};

pub mod module;
pub use module::PosServiceModule;

pub mod config;
pub use config::{Config, ImageFailurePolicy};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

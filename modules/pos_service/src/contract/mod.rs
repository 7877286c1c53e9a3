//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::PosError;
pub use model::{
    NewAccount, NewOrder, NewProduct, Order, OrderDetail, OrderItem,
    OrderStatus, Product, ProductUpdate, StatusFilter, TopSeller, User,
};

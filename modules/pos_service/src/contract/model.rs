//! Contract models for the POS service
//!
//! These models are transport-agnostic and shared by the domain, storage and
//! REST layers.

use chrono::{DateTime, Utc};

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i32,
    /// Display name, never empty
    pub name: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Stored image path (or a data URI once inlined for the listing)
    pub image_url: String,
}

/// Product to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

/// Partial product update
///
/// `image_url` of `None` (or an empty string) keeps the stored image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order is being prepared
    OnProgress,
    /// Order was served and paid
    Completed,
    /// Order was dropped
    Canceled,
}

impl OrderStatus {
    /// Wire and storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnProgress => "On Progress",
            Self::Completed => "Order Completed",
            Self::Canceled => "Order Canceled",
        }
    }

    /// Parse the wire and storage representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "On Progress" => Some(Self::OnProgress),
            "Order Completed" => Some(Self::Completed),
            "Order Canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Whether no further transition is defined from this status
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::OnProgress)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which orders a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Orders still `OnProgress`
    Active,
    /// Orders that reached `Completed` or `Canceled`
    Closed,
}

impl StatusFilter {
    /// Statuses matched by this filter
    pub fn statuses(self) -> &'static [OrderStatus] {
        match self {
            Self::Active => &[OrderStatus::OnProgress],
            Self::Closed => &[OrderStatus::Completed, OrderStatus::Canceled],
        }
    }
}

/// Order header with its persisted line items
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// Legacy free-text summary
    pub menu: Option<String>,
    pub status: OrderStatus,
    /// Absent when the store holds NULL
    pub total_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub details: Vec<OrderDetail>,
}

/// Persisted order line item
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    /// Denormalized copy of the product name
    pub product_name: String,
    pub quantity: i32,
    /// Line total
    pub total_price: f64,
}

/// Line item submitted at order creation time
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: f64,
}

/// Order creation request
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub total_price: Option<f64>,
}

/// Staff account as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// bcrypt hash, never the clear-text password
    pub password_hash: String,
    pub role: String,
}

/// Account creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Best selling product by summed quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSeller {
    pub product_name: String,
    pub total_sold: i64,
}

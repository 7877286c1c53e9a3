//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Product DTOs =====

/// Product as returned by the API
///
/// In the catalog listing `image_url` carries an inlined data URI; the
/// single-product endpoint returns the stored path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,

    #[schema(example = "Iced Latte")]
    pub name: String,

    #[schema(example = 25000.0)]
    pub price: f64,

    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub image_url: String,
}

// ===== Order DTOs =====

/// Persisted order line item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub order_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: f64,
}

/// Order with its line items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,

    /// `On Progress`, `Order Completed` or `Order Canceled`
    #[schema(example = "On Progress")]
    pub status: String,

    /// Omitted when unknown, never rendered as zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub details: Vec<OrderDetailDto>,
}

/// Line item in an order creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderItemDto {
    #[schema(example = "Iced Latte")]
    pub product_name: String,

    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(example = 50000.0)]
    pub total_price: f64,
}

/// Order creation request
///
/// Clients may send the full order shape (`menu`, `status`...); anything but
/// `items` and `total_price` is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemDto>,

    #[serde(default)]
    pub total_price: Option<f64>,
}

/// `?id=` query of the order endpoints
#[derive(Debug, Deserialize)]
pub struct OrderIdQuery {
    pub id: Option<String>,
}

// ===== Account DTOs =====

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,

    #[schema(example = "kasir")]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub username: String,
    pub password: String,

    #[schema(example = "admin")]
    pub role: String,
}

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ===== Dashboard DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopSellerDto {
    pub product_name: String,
    pub total_sold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalRevenueResponse {
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCountResponse {
    pub product_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OnProgressCountResponse {
    pub order_onprogress_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminCountResponse {
    pub admin_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CashierCountResponse {
    pub cashier_count: u64,
}

//! HTTP request handlers - thin layer that delegates to domain services

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    openapi::ApiDoc,
};
use crate::domain::{ImageUpload, PosServices};
use crate::contract::StatusFilter;
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, Query,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;
use utoipa::OpenApi;

// ===== Product Handlers =====

/// Catalog listing, served from the cache when warm
pub async fn list_products(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Response, Problem> {
    let listing = services
        .catalog
        .product_listing()
        .await
        .map_err(map_domain_error)?;

    // Cached text is already JSON; send it as is
    Ok(([(header::CONTENT_TYPE, "application/json")], listing).into_response())
}

pub async fn get_product(
    Extension(services): Extension<Arc<PosServices>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductDto>, Problem> {
    let id = parse_product_id(&raw_id)?;
    let product = services
        .catalog
        .get_product(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(product.into()))
}

pub async fn create_product(
    Extension(services): Extension<Arc<PosServices>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, String), Problem> {
    let form = read_product_form(multipart).await?;

    let id = services
        .catalog
        .create_product(form.name, form.price, form.image)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        format!("Product added successfully with ID: {id}"),
    ))
}

pub async fn update_product(
    Extension(services): Extension<Arc<PosServices>>,
    Path(raw_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, Problem> {
    let id = parse_product_id(&raw_id)?;
    let form = read_product_form(multipart).await?;

    services
        .catalog
        .update_product(id, form.name, form.price, form.image)
        .await
        .map_err(map_domain_error)?;

    Ok(format!("Product updated successfully with ID: {id}"))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<PosServices>>,
    Path(raw_id): Path<String>,
) -> Result<String, Problem> {
    let id = parse_product_id(&raw_id)?;

    services
        .catalog
        .delete_product(id)
        .await
        .map_err(map_domain_error)?;

    Ok(format!("Product deleted successfully with ID: {id}"))
}

/// Fields of the product multipart form
struct ProductForm {
    name: String,
    price: f64,
    image: Option<ImageUpload>,
}

async fn read_product_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ProductForm, Problem> {
    let mut multipart =
        multipart.map_err(|e| Problem::bad_request(format!("Invalid form: {}", e.body_text())))?;

    let mut name = String::new();
    let mut price = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Problem::bad_request(format!("Invalid form: {}", e.body_text())))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = field_text(field).await?,
            "price" => price = Some(field_text(field).await?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    Problem::bad_request(format!("Failed to read image: {}", e.body_text()))
                })?;
                image = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let price = price
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Problem::bad_request("price is required"))?;
    let price = price
        .parse::<f64>()
        .map_err(|_| Problem::bad_request(format!("Invalid price: {price}")))?;

    Ok(ProductForm {
        name: name.trim().to_string(),
        price,
        image,
    })
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Problem> {
    field
        .text()
        .await
        .map_err(|e| Problem::bad_request(format!("Invalid form field: {}", e.body_text())))
}

fn parse_product_id(raw: &str) -> Result<i32, Problem> {
    raw.trim()
        .parse()
        .map_err(|_| Problem::bad_request(format!("Invalid product ID: {raw}")))
}

// ===== Order Handlers =====

/// Orders still in progress
pub async fn list_orders(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    list_by_filter(&services, StatusFilter::Active).await
}

/// Completed and canceled orders
pub async fn list_completed_orders(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    list_by_filter(&services, StatusFilter::Closed).await
}

async fn list_by_filter(
    services: &PosServices,
    filter: StatusFilter,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    let orders = services
        .orders
        .list_orders(filter)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

pub async fn create_order(
    Extension(services): Extension<Arc<PosServices>>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, String), Problem> {
    let Json(req) = body.map_err(|e| Problem::bad_request(e.body_text()))?;

    let id = services
        .orders
        .create_order(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        format!("Order created successfully. Order ID: {id}"),
    ))
}

pub async fn complete_order(
    Extension(services): Extension<Arc<PosServices>>,
    Query(query): Query<OrderIdQuery>,
) -> Result<String, Problem> {
    let id = parse_order_id(&query)?;

    services
        .orders
        .complete_order(id)
        .await
        .map_err(map_domain_error)?;

    Ok(format!(
        "Order marked as completed successfully. Order ID: {id}"
    ))
}

pub async fn cancel_order(
    Extension(services): Extension<Arc<PosServices>>,
    Query(query): Query<OrderIdQuery>,
) -> Result<String, Problem> {
    let id = parse_order_id(&query)?;

    services
        .orders
        .cancel_order(id)
        .await
        .map_err(map_domain_error)?;

    Ok(format!(
        "Order marked as canceled successfully. Order ID: {id}"
    ))
}

pub async fn delete_order(
    Extension(services): Extension<Arc<PosServices>>,
    Query(query): Query<OrderIdQuery>,
) -> Result<String, Problem> {
    let id = parse_order_id(&query)?;

    services
        .orders
        .delete_order(id)
        .await
        .map_err(map_domain_error)?;

    Ok(format!("Order deleted successfully. Order ID: {id}"))
}

fn parse_order_id(query: &OrderIdQuery) -> Result<i32, Problem> {
    let raw = query.id.as_deref().map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(Problem::bad_request("Missing order ID"));
    }

    raw.parse()
        .map_err(|_| Problem::bad_request(format!("Invalid order ID: {raw}")))
}

// ===== Account Handlers =====

pub async fn login(
    Extension(services): Extension<Arc<PosServices>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, Problem> {
    let Json(req) = body.map_err(|e| Problem::bad_request(e.body_text()))?;

    let role = services
        .accounts
        .login(&req.username, &req.password)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        role,
    }))
}

pub async fn create_account(
    Extension(services): Extension<Arc<PosServices>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), Problem> {
    let Json(req) = body.map_err(|e| Problem::bad_request(e.body_text()))?;

    services
        .accounts
        .create_account(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Account created successfully".to_string(),
        }),
    ))
}

// ===== Dashboard Handlers =====

pub async fn top_selling_menu(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<Vec<TopSellerDto>>, Problem> {
    let top = services
        .dashboard
        .top_selling_menu()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(top.into_iter().map(Into::into).collect()))
}

pub async fn total_revenue(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<TotalRevenueResponse>, Problem> {
    let total_revenue = services
        .dashboard
        .total_revenue()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TotalRevenueResponse { total_revenue }))
}

pub async fn product_count(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<ProductCountResponse>, Problem> {
    let product_count = services
        .dashboard
        .product_count()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProductCountResponse { product_count }))
}

pub async fn onprogress_count(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<OnProgressCountResponse>, Problem> {
    let order_onprogress_count = services
        .dashboard
        .onprogress_count()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(OnProgressCountResponse {
        order_onprogress_count,
    }))
}

pub async fn admin_count(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<AdminCountResponse>, Problem> {
    let admin_count = services
        .dashboard
        .admin_count()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AdminCountResponse { admin_count }))
}

pub async fn cashier_count(
    Extension(services): Extension<Arc<PosServices>>,
) -> Result<Json<CashierCountResponse>, Problem> {
    let cashier_count = services
        .dashboard
        .cashier_count()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CashierCountResponse { cashier_count }))
}

// ===== OpenAPI =====

pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

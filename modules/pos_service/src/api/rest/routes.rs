//! Route registration

use super::handlers;
use crate::domain::PosServices;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Register all REST routes, wrapped in the CORS policy for `allowed_origin`
pub fn register_routes(
    router: Router,
    services: Arc<PosServices>,
    allowed_origin: &str,
) -> anyhow::Result<Router> {
    let cors = cors_layer(allowed_origin)?;

    let router = router
        // Catalog
        .route("/products", get(handlers::list_products))
        .route("/product/{id}", get(handlers::get_product))
        .route("/create-product", post(handlers::create_product))
        .route("/update-product/{id}", put(handlers::update_product))
        .route("/delete-product/{id}", delete(handlers::delete_product))
        // Orders
        .route("/orders", get(handlers::list_orders))
        .route("/create-order", post(handlers::create_order))
        .route("/complete-order", post(handlers::complete_order))
        .route("/cancel-order", post(handlers::cancel_order))
        .route("/completed-orders", get(handlers::list_completed_orders))
        .route("/delete-order", delete(handlers::delete_order))
        // Accounts
        .route("/login", post(handlers::login))
        .route("/create-account", post(handlers::create_account))
        // Dashboard
        .route("/top-selling-menu", get(handlers::top_selling_menu))
        .route("/total-revenue", get(handlers::total_revenue))
        .route("/product-count", get(handlers::product_count))
        .route("/onprogress-count", get(handlers::onprogress_count))
        .route("/admin-count", get(handlers::admin_count))
        .route("/cashier-count", get(handlers::cashier_count))
        // Docs
        .route("/openapi.json", get(handlers::openapi_document))
        .layer(Extension(services))
        .layer(cors);

    Ok(router)
}

/// CORS policy for the single allowed frontend origin
pub fn cors_layer(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| anyhow::anyhow!("invalid CORS origin '{allowed_origin}': {e}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

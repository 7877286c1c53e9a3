//! HTTP-level tests driving the axum router

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use common::{print_test_header, TestPos};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "pos-test-boundary";

async fn app() -> (TestPos, Router) {
    let pos = TestPos::new().await;
    let router = pos
        .module
        .register_rest(Router::new())
        .expect("Failed to register routes");
    (pos, router)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn multipart_request(
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn text(body: &[u8]) -> String {
    String::from_utf8(body.to_vec()).unwrap()
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

// ===== Orders =====

#[tokio::test]
async fn create_order_returns_201_with_order_id() {
    print_test_header(
        "create_order_returns_201_with_order_id",
        "POST /create-order with a known product answers 201 and the new id.",
    );
    let (pos, router) = app().await;
    pos.seed_product("Coffee", 5.0).await;

    let (status, body) = send(
        &router,
        json_request(
            Method::POST,
            "/create-order",
            json!({
                "items": [{"product_name": "Coffee", "quantity": 2, "total_price": 10.0}],
                "total_price": 10.0
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = text(&body);
    let id = body
        .strip_prefix("Order created successfully. Order ID: ")
        .expect("unexpected body");
    assert!(id.parse::<i32>().is_ok());

    let (status, body) = send(&router, empty_request(Method::GET, "/orders")).await;
    assert_eq!(status, StatusCode::OK);
    let orders = json_body(&body);
    assert_eq!(orders[0]["status"], "On Progress");
    assert_eq!(orders[0]["total_price"], 10.0);
    assert_eq!(orders[0]["details"][0]["quantity"], 2);
}

#[tokio::test]
async fn create_order_with_unknown_product_is_400() {
    let (_pos, router) = app().await;

    let (status, body) = send(
        &router,
        json_request(
            Method::POST,
            "/create-order",
            json!({"items": [{"product_name": "Ghost", "quantity": 1, "total_price": 1.0}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_body(&body)["detail"]
        .as_str()
        .unwrap()
        .contains("Ghost"));
}

#[tokio::test]
async fn malformed_order_json_is_400_problem() {
    let (_pos, router) = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/create-order")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["status"], 400);
}

#[tokio::test]
async fn complete_unknown_order_is_404() {
    let (_pos, router) = app().await;

    let (status, body) = send(&router, empty_request(Method::POST, "/complete-order?id=999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(&body)["detail"],
        "No order found with the given ID"
    );
}

#[tokio::test]
async fn order_endpoints_require_an_id() {
    let (_pos, router) = app().await;

    for (method, uri) in [
        (Method::POST, "/complete-order"),
        (Method::POST, "/cancel-order?id="),
        (Method::DELETE, "/delete-order"),
    ] {
        let (status, body) = send(&router, empty_request(method, uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(&body)["detail"], "Missing order ID");
    }

    let (status, _) = send(&router, empty_request(Method::POST, "/complete-order?id=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_lifecycle_over_http() {
    let (pos, router) = app().await;
    pos.seed_product("Coffee", 5.0).await;

    let (_, body) = send(
        &router,
        json_request(
            Method::POST,
            "/create-order",
            json!({"items": [{"product_name": "Coffee", "quantity": 1, "total_price": 5.0}]}),
        ),
    )
    .await;
    let id: i32 = text(&body).rsplit(' ').next().unwrap().parse().unwrap();

    let (status, body) = send(&router, empty_request(Method::GET, "/completed-orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "[]");

    let (status, body) = send(
        &router,
        empty_request(Method::POST, &format!("/cancel-order?id={id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(&body),
        format!("Order marked as canceled successfully. Order ID: {id}")
    );

    let (_, body) = send(&router, empty_request(Method::GET, "/completed-orders")).await;
    let closed = json_body(&body);
    assert_eq!(closed[0]["id"], id);
    assert_eq!(closed[0]["status"], "Order Canceled");
    // Order was created without a total
    assert!(closed[0].get("total_price").is_none());

    let (status, body) = send(
        &router,
        empty_request(Method::DELETE, &format!("/delete-order?id={id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(&body),
        format!("Order deleted successfully. Order ID: {id}")
    );
}

// ===== Products =====

#[tokio::test]
async fn product_crud_over_http() {
    print_test_header(
        "product_crud_over_http",
        "Multipart create/update and delete are reflected by GET /products.",
    );
    let (pos, router) = app().await;

    let (status, body) = send(
        &router,
        multipart_request(
            Method::POST,
            "/create-product",
            &[("name", "Latte"), ("price", "7.5")],
            Some(("latte.png", b"latte-bytes")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let body = text(&body);
    let id: i32 = body
        .strip_prefix("Product added successfully with ID: ")
        .unwrap()
        .parse()
        .unwrap();
    assert!(pos.images.contains("uploads/latte.png"));

    let response = router
        .clone()
        .oneshot(empty_request(Method::GET, "/products"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let products = json_body(&body);
    assert_eq!(products[0]["id"], id);
    assert!(products[0]["image_url"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let (status, body) = send(
        &router,
        multipart_request(
            Method::PUT,
            &format!("/update-product/{id}"),
            &[("name", "Oat Latte"), ("price", "8")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(&body),
        format!("Product updated successfully with ID: {id}")
    );

    let (status, body) = send(&router, empty_request(Method::GET, &format!("/product/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    let product = json_body(&body);
    assert_eq!(product["name"], "Oat Latte");
    assert_eq!(product["image_url"], "uploads/latte.png");

    let (status, body) = send(
        &router,
        empty_request(Method::DELETE, &format!("/delete-product/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(&body),
        format!("Product deleted successfully with ID: {id}")
    );

    let (_, body) = send(&router, empty_request(Method::GET, "/products")).await;
    assert_eq!(text(&body), "[]");
}

#[tokio::test]
async fn invalid_product_forms_are_400() {
    let (_pos, router) = app().await;

    let (status, _) = send(
        &router,
        multipart_request(
            Method::POST,
            "/create-product",
            &[("name", "Latte"), ("price", "cheap")],
            Some(("latte.png", b"x")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        multipart_request(
            Method::POST,
            "/create-product",
            &[("name", "Latte"), ("price", "7")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        json_request(Method::POST, "/create-product", json!({"name": "Latte"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_is_404() {
    let (_pos, router) = app().await;

    let (status, _) = send(&router, empty_request(Method::GET, "/product/41")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        multipart_request(
            Method::PUT,
            "/update-product/41",
            &[("name", "Ghost"), ("price", "1")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ===== Accounts and dashboard =====

#[tokio::test]
async fn account_creation_and_login() {
    let (_pos, router) = app().await;

    let (status, body) = send(
        &router,
        json_request(
            Method::POST,
            "/create-account",
            json!({"username": "sari", "password": "s3cret", "role": "kasir"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json_body(&body),
        json!({"message": "Account created successfully"})
    );

    let (status, body) = send(
        &router,
        json_request(
            Method::POST,
            "/login",
            json!({"username": "sari", "password": "s3cret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"message": "Login successful", "role": "kasir"})
    );

    let (status, _) = send(
        &router,
        json_request(
            Method::POST,
            "/login",
            json!({"username": "sari", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&router, empty_request(Method::GET, "/cashier-count")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"cashier_count": 1}));
}

#[tokio::test]
async fn dashboard_endpoints_use_expected_keys() {
    let (_pos, router) = app().await;

    let cases = [
        ("/total-revenue", json!({"total_revenue": 0.0})),
        ("/product-count", json!({"product_count": 0})),
        ("/onprogress-count", json!({"order_onprogress_count": 0})),
        ("/admin-count", json!({"admin_count": 0})),
        ("/cashier-count", json!({"cashier_count": 0})),
        ("/top-selling-menu", json!([])),
    ];

    for (uri, expected) in cases {
        let (status, body) = send(&router, empty_request(Method::GET, uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json_body(&body), expected, "{uri}");
    }
}

// ===== Cross-cutting =====

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (_pos, router) = app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/create-order")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (_pos, router) = app().await;

    let (status, body) = send(&router, empty_request(Method::GET, "/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);

    let doc = json_body(&body);
    assert!(doc["components"]["schemas"].get("OrderDto").is_some());
}

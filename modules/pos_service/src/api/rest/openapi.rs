//! OpenAPI document of the REST DTOs

use super::{dto::*, error::Problem};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "POS Service API", description = "Catalog, orders, accounts and dashboard"),
    components(schemas(
        ProductDto,
        OrderDto,
        OrderDetailDto,
        OrderItemDto,
        CreateOrderRequest,
        LoginRequest,
        LoginResponse,
        CreateAccountRequest,
        MessageResponse,
        TopSellerDto,
        TotalRevenueResponse,
        ProductCountResponse,
        OnProgressCountResponse,
        AdminCountResponse,
        CashierCountResponse,
        Problem,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_dto_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        assert!(schemas.get("OrderDto").is_some());
        assert!(schemas.get("ProductDto").is_some());
        assert!(schemas.get("Problem").is_some());
    }
}

//! Mappers between contract models and REST DTOs

use super::dto::*;
use crate::contract::{NewAccount, NewOrder, Order, OrderDetail, OrderItem, Product, TopSeller};

impl From<Product> for ProductDto {
    fn from(model: Product) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            image_url: model.image_url,
        }
    }
}

impl From<OrderDetail> for OrderDetailDto {
    fn from(model: OrderDetail) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_name: model.product_name,
            quantity: model.quantity,
            total_price: model.total_price,
        }
    }
}

impl From<Order> for OrderDto {
    fn from(model: Order) -> Self {
        Self {
            id: model.id,
            menu: model.menu,
            status: model.status.as_str().to_string(),
            total_price: model.total_price,
            created_at: model.created_at,
            details: model.details.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            items: req
                .items
                .into_iter()
                .map(|item| OrderItem {
                    product_name: item.product_name,
                    quantity: item.quantity,
                    total_price: item.total_price,
                })
                .collect(),
            total_price: req.total_price,
        }
    }
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(req: CreateAccountRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            role: req.role,
        }
    }
}

impl From<TopSeller> for TopSellerDto {
    fn from(model: TopSeller) -> Self {
        Self {
            product_name: model.product_name,
            total_sold: model.total_sold,
        }
    }
}

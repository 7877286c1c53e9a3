//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{order, order_detail, product, user};
use crate::contract::{Order, OrderDetail, OrderStatus, Product, User};

// ===== Product Conversions =====

impl From<product::Model> for Product {
    fn from(entity: product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            image_url: entity.image_url,
        }
    }
}

// ===== Order Conversions =====

impl From<order_detail::Model> for OrderDetail {
    fn from(entity: order_detail::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_name: entity.product_name,
            quantity: entity.quantity,
            total_price: entity.total_price,
        }
    }
}

/// Assemble an order from its header row and detail rows
pub fn order_from_rows(
    header: order::Model,
    details: Vec<order_detail::Model>,
) -> anyhow::Result<Order> {
    let status = OrderStatus::parse(&header.status).ok_or_else(|| {
        anyhow::anyhow!(
            "order {} has unknown status '{}'",
            header.id,
            header.status
        )
    })?;

    Ok(Order {
        id: header.id,
        menu: header.menu,
        status,
        total_price: header.total_price,
        created_at: header.created_at,
        details: details.into_iter().map(Into::into).collect(),
    })
}

// ===== User Conversions =====

impl From<user::Model> for User {
    fn from(entity: user::Model) -> Self {
        Self {
            username: entity.username,
            password_hash: entity.password,
            role: entity.role,
        }
    }
}

impl From<&User> for user::ActiveModel {
    fn from(model: &User) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            username: Set(model.username.clone()),
            password: Set(model.password_hash.clone()),
            role: Set(model.role.clone()),
        }
    }
}

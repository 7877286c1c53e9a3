//! SeaORM repository implementations

use crate::contract::{
    NewOrder, NewProduct, Order, OrderStatus, Product, ProductUpdate, TopSeller, User,
};
use crate::domain::repository::{
    OrderInsert, OrderRepository, ProductRepository, StatsRepository, UserRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr,
    sea_query::{Alias, Func, SimpleExpr},
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{order, order_detail, product, user};
use super::mapper::order_from_rows;

// ===== Order Repository =====

pub struct SeaOrmOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create_with_details(&self, new_order: &NewOrder) -> Result<OrderInsert> {
        // Any early return below drops the transaction, which rolls it back
        let txn = self.db.begin().await?;

        let header = order::ActiveModel {
            id: NotSet,
            menu: Set(None),
            status: Set(OrderStatus::OnProgress.as_str().to_string()),
            total_price: Set(new_order.total_price),
            created_at: Set(chrono::Utc::now()),
        };
        let order_id = order::Entity::insert(header)
            .exec(&txn)
            .await?
            .last_insert_id;

        for item in &new_order.items {
            let product_exists = product::Entity::find()
                .filter(product::Column::Name.eq(item.product_name.as_str()))
                .count(&txn)
                .await?
                > 0;

            if !product_exists {
                txn.rollback().await?;
                return Ok(OrderInsert::UnknownProduct(item.product_name.clone()));
            }

            let detail = order_detail::ActiveModel {
                id: NotSet,
                order_id: Set(order_id),
                product_name: Set(item.product_name.clone()),
                quantity: Set(item.quantity),
                total_price: Set(item.total_price),
            };
            order_detail::Entity::insert(detail).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(OrderInsert::Created(order_id))
    }

    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<u64> {
        let result = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(status.as_str()))
            .filter(order::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn list_by_status(&self, statuses: &[OrderStatus]) -> Result<Vec<Order>> {
        let statuses: Vec<&'static str> = statuses.iter().map(|s| s.as_str()).collect();

        let rows = order::Entity::find()
            .filter(order::Column::Status.is_in(statuses))
            .order_by_asc(order::Column::Id)
            .find_with_related(order_detail::Entity)
            .order_by_asc(order_detail::Column::Id)
            .all(&*self.db)
            .await?;

        rows.into_iter()
            .map(|(header, details)| order_from_rows(header, details))
            .collect()
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = order::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Product Repository =====

pub struct SeaOrmProductRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let results = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let result = product::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn create(&self, new_product: &NewProduct) -> Result<i32> {
        let active = product::ActiveModel {
            id: NotSet,
            name: Set(new_product.name.clone()),
            price: Set(new_product.price),
            image_url: Set(new_product.image_url.clone()),
        };

        let result = product::Entity::insert(active).exec(&*self.db).await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, update: &ProductUpdate) -> Result<u64> {
        // COALESCE(NULLIF(:image, ''), image_url) keeps the stored image when no
        // new one is supplied, within the same UPDATE statement
        let new_image = update.image_url.clone().unwrap_or_default();
        let image_expr = Func::coalesce([
            SimpleExpr::from(Func::cust(Alias::new("NULLIF")).arg(new_image).arg("")),
            SimpleExpr::from(Expr::col(product::Column::ImageUrl)),
        ]);

        let result = product::Entity::update_many()
            .col_expr(product::Column::Name, Expr::value(update.name.clone()))
            .col_expr(product::Column::Price, Expr::value(update.price))
            .col_expr(product::Column::ImageUrl, image_expr.into())
            .filter(product::Column::Id.eq(update.id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = product::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new_user: &User) -> Result<bool> {
        let active: user::ActiveModel = new_user.into();

        match user::Entity::insert(active).exec(&*self.db).await {
            Ok(_) => Ok(true),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }
}

// ===== Stats Repository =====

#[derive(Debug, FromQueryResult)]
struct TopSellerRow {
    product_name: String,
    total_sold: i64,
}

pub struct SeaOrmStatsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStatsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsRepository for SeaOrmStatsRepository {
    async fn top_seller(&self) -> Result<Option<TopSeller>> {
        let row = order_detail::Entity::find()
            .select_only()
            .column(order_detail::Column::ProductName)
            .column_as(order_detail::Column::Quantity.sum(), "total_sold")
            .group_by(order_detail::Column::ProductName)
            .order_by_desc(order_detail::Column::Quantity.sum())
            .limit(1)
            .into_model::<TopSellerRow>()
            .one(&*self.db)
            .await?;

        Ok(row.map(|r| TopSeller {
            product_name: r.product_name,
            total_sold: r.total_sold,
        }))
    }

    async fn revenue(&self, status: OrderStatus) -> Result<f64> {
        let total = order::Entity::find()
            .select_only()
            .column_as(order::Column::TotalPrice.sum(), "revenue")
            .filter(order::Column::Status.eq(status.as_str()))
            .into_tuple::<Option<f64>>()
            .one(&*self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    async fn count_products(&self) -> Result<u64> {
        Ok(product::Entity::find().count(&*self.db).await?)
    }

    async fn count_orders(&self, status: OrderStatus) -> Result<u64> {
        let count = order::Entity::find()
            .filter(order::Column::Status.eq(status.as_str()))
            .count(&*self.db)
            .await?;

        Ok(count)
    }

    async fn count_users_with_role(&self, role: &str) -> Result<u64> {
        let count = user::Entity::find()
            .filter(user::Column::Role.eq(role))
            .count(&*self.db)
            .await?;

        Ok(count)
    }
}

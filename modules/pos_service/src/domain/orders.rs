//! Order service - order creation transaction, status transitions and reads

use super::repository::{OrderInsert, OrderRepository};
use super::validation::validate_new_order;
use crate::contract::{NewOrder, Order, OrderStatus, PosError, StatusFilter};
use std::sync::Arc;

/// Domain service for the order lifecycle
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Create a new service instance
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Create an order with one detail row per item, atomically.
    ///
    /// Every item must name an existing product; otherwise nothing is
    /// persisted and `ReferentialIntegrity` is returned.
    pub async fn create_order(&self, order: NewOrder) -> Result<i32, PosError> {
        validate_new_order(&order)?;

        match self
            .orders
            .create_with_details(&order)
            .await
            .map_err(PosError::store)?
        {
            OrderInsert::Created(order_id) => {
                tracing::info!(order_id, items = order.items.len(), "Order created");
                Ok(order_id)
            }
            OrderInsert::UnknownProduct(product_name) => {
                tracing::info!(%product_name, "Order rejected: unknown product");
                Err(PosError::ReferentialIntegrity { product_name })
            }
        }
    }

    /// Mark an order as completed
    pub async fn complete_order(&self, order_id: i32) -> Result<(), PosError> {
        self.transition_status(order_id, OrderStatus::Completed)
            .await
    }

    /// Mark an order as canceled
    pub async fn cancel_order(&self, order_id: i32) -> Result<(), PosError> {
        self.transition_status(order_id, OrderStatus::Canceled).await
    }

    /// Move an order to a terminal status.
    ///
    /// The prior status is not checked, so a canceled order can still be
    /// completed and vice versa.
    pub async fn transition_status(
        &self,
        order_id: i32,
        target: OrderStatus,
    ) -> Result<(), PosError> {
        if !target.is_terminal() {
            return Err(PosError::validation(format!(
                "Cannot transition an order to '{}'",
                target
            )));
        }

        let affected = self
            .orders
            .update_status(order_id, target)
            .await
            .map_err(PosError::store)?;

        if affected == 0 {
            return Err(PosError::order_not_found());
        }

        tracing::info!(order_id, status = %target, "Order status updated");
        Ok(())
    }

    /// List orders matching the filter, ascending by id, with details
    pub async fn list_orders(&self, filter: StatusFilter) -> Result<Vec<Order>, PosError> {
        self.orders
            .list_by_status(filter.statuses())
            .await
            .map_err(PosError::store)
    }

    /// Delete an order and, through the schema cascade, its details
    pub async fn delete_order(&self, order_id: i32) -> Result<(), PosError> {
        let affected = self
            .orders
            .delete(order_id)
            .await
            .map_err(PosError::store)?;

        if affected == 0 {
            return Err(PosError::order_not_found());
        }

        tracing::info!(order_id, "Order deleted");
        Ok(())
    }
}

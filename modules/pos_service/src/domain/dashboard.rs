//! Dashboard counters

use super::repository::StatsRepository;
use crate::contract::{OrderStatus, PosError, TopSeller};
use std::sync::Arc;

pub const ADMIN_ROLE: &str = "admin";
pub const CASHIER_ROLE: &str = "kasir";

pub struct DashboardService {
    stats: Arc<dyn StatsRepository>,
}

impl DashboardService {
    pub fn new(stats: Arc<dyn StatsRepository>) -> Self {
        Self { stats }
    }

    /// Best selling menu item; empty when nothing was ever ordered
    pub async fn top_selling_menu(&self) -> Result<Vec<TopSeller>, PosError> {
        let top = self.stats.top_seller().await.map_err(PosError::store)?;
        Ok(top.into_iter().collect())
    }

    /// Revenue of completed orders
    pub async fn total_revenue(&self) -> Result<f64, PosError> {
        self.stats
            .revenue(OrderStatus::Completed)
            .await
            .map_err(PosError::store)
    }

    pub async fn product_count(&self) -> Result<u64, PosError> {
        self.stats.count_products().await.map_err(PosError::store)
    }

    pub async fn onprogress_count(&self) -> Result<u64, PosError> {
        self.stats
            .count_orders(OrderStatus::OnProgress)
            .await
            .map_err(PosError::store)
    }

    pub async fn admin_count(&self) -> Result<u64, PosError> {
        self.stats
            .count_users_with_role(ADMIN_ROLE)
            .await
            .map_err(PosError::store)
    }

    pub async fn cashier_count(&self) -> Result<u64, PosError> {
        self.stats
            .count_users_with_role(CASHIER_ROLE)
            .await
            .map_err(PosError::store)
    }
}

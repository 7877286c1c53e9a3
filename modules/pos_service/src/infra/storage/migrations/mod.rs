//! Database migrations for the POS service

use sea_orm_migration::prelude::*;

mod m20241201_000001_create_products;
mod m20241201_000002_create_orders;
mod m20241201_000003_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_000001_create_products::Migration),
            Box::new(m20241201_000002_create_orders::Migration),
            Box::new(m20241201_000003_create_users::Migration),
        ]
    }
}

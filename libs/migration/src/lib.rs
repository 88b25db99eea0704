pub use sea_orm_migration::prelude::*;

mod m20250612_000000_bootstrap;
mod m20250612_000001_create_clients;
mod m20250612_000002_create_products;
mod m20250612_000003_create_orders;
mod m20250612_000004_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000000_bootstrap::Migration),
            Box::new(m20250612_000001_create_clients::Migration),
            Box::new(m20250612_000002_create_products::Migration),
            Box::new(m20250612_000003_create_orders::Migration),
            Box::new(m20250612_000004_create_order_items::Migration),
        ]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20241029_000001_create_user_table;
mod m20241029_000002_create_shop_table;
mod m20241209_000003_create_seller_request_table;
mod m20241210_000004_create_category_table;
mod m20241210_000005_create_product_table;
mod m20241210_000006_create_product_category_table;
mod m20241210_000007_create_inventory_table;
mod m20241210_000008_create_discount_table;
mod m20241211_000009_create_pending_seller_request_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241029_000001_create_user_table::Migration),
            Box::new(m20241029_000002_create_shop_table::Migration),
            Box::new(m20241209_000003_create_seller_request_table::Migration),
            Box::new(m20241210_000004_create_category_table::Migration),
            Box::new(m20241210_000005_create_product_table::Migration),
            Box::new(m20241210_000006_create_product_category_table::Migration),
            Box::new(m20241210_000007_create_inventory_table::Migration),
            Box::new(m20241210_000008_create_discount_table::Migration),
            Box::new(m20241211_000009_create_pending_seller_request_index::Migration),
        ]
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20241029_000002_create_shop_table::Shop;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::ShopId))
                    .col(string_len(Product::Name, 255))
                    .col(text_null(Product::Description))
                    .col(double(Product::Price))
                    .col(string_len(Product::AvailabilityStatus, 20).default("available"))
                    .col(string_len(Product::Status, 20).default("pending"))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_shop_id")
                            .from(Product::Table, Product::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ShopId,
    Name,
    Description,
    Price,
    AvailabilityStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241029_000001_create_user_table::User, m20241210_000004_create_category_table::Category,
    m20241210_000005_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discount::Table)
                    .if_not_exists()
                    .col(pk_auto(Discount::Id))
                    .col(integer(Discount::AdminId))
                    .col(integer_null(Discount::CategoryId))
                    .col(integer_null(Discount::ProductId))
                    .col(string_len_uniq(Discount::Code, 50))
                    .col(double(Discount::Percentage))
                    .col(date(Discount::ValidFrom))
                    .col(date(Discount::ValidUntil))
                    .col(
                        timestamp_with_time_zone(Discount::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Discount::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_admin_id")
                            .from(Discount::Table, Discount::AdminId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_category_id")
                            .from(Discount::Table, Discount::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_product_id")
                            .from(Discount::Table, Discount::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Discount {
    Table,
    Id,
    AdminId,
    CategoryId,
    ProductId,
    Code,
    Percentage,
    ValidFrom,
    ValidUntil,
    CreatedAt,
    UpdatedAt,
}

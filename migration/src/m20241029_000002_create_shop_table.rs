use sea_orm_migration::{prelude::*, schema::*};

use super::m20241029_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(pk_auto(Shop::Id))
                    .col(integer(Shop::UserId))
                    .col(string_len_uniq(Shop::ShopName, 255))
                    .col(text_null(Shop::Description))
                    .col(boolean(Shop::IsActive).default(true))
                    .col(string_len_null(Shop::Address, 255))
                    .col(string_len_null(Shop::Contact, 20))
                    .col(string_len_null(Shop::PostalCode, 10))
                    .col(
                        timestamp_with_time_zone(Shop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Shop::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_user_id")
                            .from(Shop::Table, Shop::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shop {
    Table,
    Id,
    UserId,
    ShopName,
    Description,
    IsActive,
    Address,
    Contact,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}

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
                    .table(SellerRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(SellerRequest::Id))
                    .col(integer(SellerRequest::UserId))
                    .col(text_null(SellerRequest::Message))
                    .col(string_len(SellerRequest::Status, 10).default("pending"))
                    .col(
                        timestamp_with_time_zone(SellerRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(SellerRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_request_user_id")
                            .from(SellerRequest::Table, SellerRequest::UserId)
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
            .drop_table(Table::drop().table(SellerRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SellerRequest {
    Table,
    Id,
    UserId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SellerRequestStatus;

/// Partial unique index allowing at most one pending request per user.
pub const PENDING_PER_USER_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_seller_request_pending_user ON seller_request (user_id) WHERE status = 'pending'";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seller_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: SellerRequestStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

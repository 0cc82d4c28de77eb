//! Seller request factory for creating test seller request entities.

use chrono::Utc;
use entity::sea_orm_active_enums::SellerRequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SellerRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    message: Option<String>,
    status: SellerRequestStatus,
}

impl<'a> SellerRequestFactory<'a> {
    /// Creates a new pending request without a message for `user_id`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            message: None,
            status: SellerRequestStatus::Pending,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(mut self, status: SellerRequestStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::seller_request::Model, DbErr> {
        let now = Utc::now();
        entity::seller_request::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending seller request for `user_id`.
pub async fn create_seller_request(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::seller_request::Model, DbErr> {
    SellerRequestFactory::new(db, user_id).build().await
}

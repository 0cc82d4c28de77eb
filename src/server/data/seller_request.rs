//! Seller request data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{Role, SellerRequestStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::seller_request::SellerRequest;

pub struct SellerRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SellerRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending request for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        message: Option<String>,
    ) -> Result<SellerRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::seller_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            message: ActiveValue::Set(message),
            status: ActiveValue::Set(SellerRequestStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SellerRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SellerRequest>, DbErr> {
        let entity = entity::prelude::SellerRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(SellerRequest::from_entity))
    }

    /// Gets requests, newest first. `user_id` restricts the result to one requester.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<SellerRequest>, DbErr> {
        let mut query = entity::prelude::SellerRequest::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::seller_request::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_desc(entity::seller_request::Column::CreatedAt)
            .order_by_desc(entity::seller_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SellerRequest::from_entity).collect())
    }

    pub async fn has_pending(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::SellerRequest::find()
            .filter(entity::seller_request::Column::UserId.eq(user_id))
            .filter(entity::seller_request::Column::Status.eq(SellerRequestStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Marks request `id` approved and promotes its user to seller in one transaction.
    pub async fn approve(&self, id: i32) -> Result<SellerRequest, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let request = entity::seller_request::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(SellerRequestStatus::Approved),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(request.user_id),
            role: ActiveValue::Set(Role::Seller),
            is_seller: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;

        Ok(SellerRequest::from_entity(request))
    }

    /// Marks request `id` rejected. The user's role is left alone.
    pub async fn reject(&self, id: i32) -> Result<SellerRequest, DbErr> {
        let request = entity::seller_request::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(SellerRequestStatus::Rejected),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(SellerRequest::from_entity(request))
    }
}

//! Seller request domain model.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::SellerRequestStatus;

use crate::model::seller_request::{SellerRequestDto, SellerRequestStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct SellerRequest {
    pub id: i32,
    /// Requesting user.
    pub user_id: i32,
    pub message: Option<String>,
    pub status: SellerRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SellerRequest {
    pub fn from_entity(entity: entity::seller_request::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SellerRequestStatus::Pending
    }

    pub fn into_dto(self) -> SellerRequestDto {
        SellerRequestDto {
            id: self.id,
            user: self.user_id,
            message: self.message,
            status: match self.status {
                SellerRequestStatus::Pending => SellerRequestStatusDto::Pending,
                SellerRequestStatus::Approved => SellerRequestStatusDto::Approved,
                SellerRequestStatus::Rejected => SellerRequestStatusDto::Rejected,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

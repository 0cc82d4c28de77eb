//! Shop domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::shop::{ShopDto, ShopRequestDto},
    server::error::{validation::FieldErrors, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: i32,
    /// Owning user. Never changes after creation.
    pub user_id: i32,
    pub shop_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    pub fn from_entity(entity: entity::shop::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            shop_name: entity.shop_name,
            description: entity.description,
            is_active: entity.is_active,
            address: entity.address,
            contact: entity.contact,
            postal_code: entity.postal_code,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ShopDto {
        ShopDto {
            id: self.id,
            user: self.user_id,
            shop_name: self.shop_name,
            description: self.description,
            is_active: self.is_active,
            address: self.address,
            contact: self.contact,
            postal_code: self.postal_code,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Current writable fields, the base a partial update is merged onto.
    pub fn to_request_dto(&self) -> ShopRequestDto {
        ShopRequestDto {
            shop_name: Some(self.shop_name.clone()),
            description: self.description.clone(),
            is_active: Some(self.is_active),
            address: self.address.clone(),
            contact: self.contact.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// Validated writable shop fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopParams {
    pub shop_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub postal_code: Option<String>,
}

impl ShopParams {
    /// Validates the request body and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(ShopParams)` - Body passed every field rule
    /// - `Err(AppError::Validation)` - Errors keyed by field name
    pub fn from_dto(dto: ShopRequestDto) -> Result<Self, AppError> {
        FieldErrors::of(&dto).into_result()?;

        Ok(Self {
            shop_name: dto.shop_name.unwrap_or_default(),
            description: dto.description,
            is_active: dto.is_active.unwrap_or(true),
            address: dto.address,
            contact: dto.contact,
            postal_code: dto.postal_code,
        })
    }
}

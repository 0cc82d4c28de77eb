//! Category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::category::{CategoryDto, CategoryRequestDto},
    server::error::{validation::FieldErrors, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryParams {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryParams {
    pub fn from_dto(dto: CategoryRequestDto) -> Result<Self, AppError> {
        FieldErrors::of(&dto).into_result()?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
        })
    }
}

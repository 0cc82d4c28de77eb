//! Discount domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::discount::{DiscountDto, DiscountRequestDto},
    server::error::{
        validation::{check_decimal_places, FieldErrors, NON_FIELD_ERRORS},
        AppError,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub id: i32,
    pub admin_id: i32,
    /// `None` when unset or when the category no longer exists.
    pub category_id: Option<i32>,
    /// `None` when unset or when the product no longer exists.
    pub product_id: Option<i32>,
    pub code: String,
    pub percentage: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Discount {
    /// Converts an entity model to a domain model, dropping references the
    /// caller found to be dangling.
    ///
    /// # Arguments
    /// - `entity` - The discount row
    /// - `category_exists` - Whether `entity.category_id` still resolves
    /// - `product_exists` - Whether `entity.product_id` still resolves
    pub fn from_entity(
        entity: entity::discount::Model,
        category_exists: bool,
        product_exists: bool,
    ) -> Self {
        Self {
            id: entity.id,
            admin_id: entity.admin_id,
            category_id: entity.category_id.filter(|_| category_exists),
            product_id: entity.product_id.filter(|_| product_exists),
            code: entity.code,
            percentage: entity.percentage,
            valid_from: entity.valid_from,
            valid_until: entity.valid_until,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DiscountDto {
        DiscountDto {
            id: self.id,
            admin: self.admin_id,
            category: self.category_id,
            product: self.product_id,
            code: self.code,
            percentage: self.percentage,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountParams {
    pub code: String,
    pub percentage: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub category_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl DiscountParams {
    /// Validates field rules plus the date ordering and converts to parameters.
    ///
    /// Existence of the referenced category and product is checked by the service.
    pub fn from_dto(dto: DiscountRequestDto) -> Result<Self, AppError> {
        let mut errors = FieldErrors::of(&dto);

        if let Some(percentage) = dto.percentage {
            check_decimal_places(&mut errors, "percentage", percentage, 2);
        }
        if let (Some(from), Some(until)) = (dto.valid_from, dto.valid_until) {
            if from > until {
                errors.add(
                    NON_FIELD_ERRORS,
                    "valid_from must be on or before valid_until.",
                );
            }
        }
        errors.into_result()?;

        Ok(Self {
            code: dto.code.unwrap_or_default(),
            percentage: dto.percentage.unwrap_or_default(),
            valid_from: dto.valid_from.unwrap_or_default(),
            valid_until: dto.valid_until.unwrap_or_default(),
            category_id: dto.category_id,
            product_id: dto.product_id,
        })
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Discount as returned by the API.
///
/// `category` and `product` are `null` when unset or when the referenced row no
/// longer exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DiscountDto {
    pub id: i32,
    /// Id of the admin who created the discount.
    pub admin: i32,
    pub category: Option<i32>,
    pub product: Option<i32>,
    pub code: String,
    pub percentage: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct DiscountRequestDto {
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 50,
            message = "Ensure this field is not blank and has no more than 50 characters."
        )
    )]
    pub code: Option<String>,
    #[validate(
        required(message = "This field is required."),
        range(
            exclusive_min = 0.0,
            max = 100.0,
            message = "Ensure this value is greater than 0 and at most 100."
        )
    )]
    pub percentage: Option<f64>,
    #[validate(required(message = "This field is required."))]
    pub valid_from: Option<NaiveDate>,
    #[validate(required(message = "This field is required."))]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub product_id: Option<i32>,
}

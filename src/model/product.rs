use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatusDto {
    #[default]
    Available,
    Rented,
    Unavailable,
}

/// Moderation state of a listing. Only admins may change it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatusDto {
    Pending,
    Approved,
    Blocked,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    /// Id of the shop listing the product.
    pub shop: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability_status: AvailabilityStatusDto,
    pub status: ProductStatusDto,
    /// Ids of the categories the product is listed under.
    pub categories: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body of `POST /api/products`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(required(message = "This field is required."))]
    pub shop_id: Option<i32>,
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 255,
            message = "Ensure this field is not blank and has no more than 255 characters."
        )
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        required(message = "This field is required."),
        range(
            min = 0.0,
            max = 99999999.99,
            message = "Ensure this value is between 0 and 99999999.99."
        )
    )]
    pub price: Option<f64>,
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatusDto>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
    /// Initial stock level (default: 0).
    #[serde(default)]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub quantity: Option<i32>,
}

/// Writable product fields for replace and (after merging) partial update.
///
/// The owning shop and the approval status cannot be changed through this body.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 255,
            message = "Ensure this field is not blank and has no more than 255 characters."
        )
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        required(message = "This field is required."),
        range(
            min = 0.0,
            max = 99999999.99,
            message = "Ensure this value is between 0 and 99999999.99."
        )
    )]
    pub price: Option<f64>,
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatusDto>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Body of `PUT /api/products/{id}/status`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProductStatusUpdateDto {
    pub status: ProductStatusDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InventoryDto {
    pub product: i32,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct InventoryUpdateDto {
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub quantity: i32,
}

/// Filters accepted by `GET /api/products`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Only products listed by this shop.
    pub shop_id: Option<i32>,
    /// Only products listed under this category.
    pub category_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

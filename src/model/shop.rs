use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Shop as returned by the API.
///
/// `id`, `user` and the timestamps are assigned by the server and ignored on input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ShopDto {
    pub id: i32,
    /// Id of the owning user.
    pub user: i32,
    pub shop_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable shop fields, used by create, replace and (after merging) partial update.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct ShopRequestDto {
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 255,
            message = "Ensure this field is not blank and has no more than 255 characters."
        )
    )]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `true` when omitted.
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    #[validate(length(
        max = 255,
        message = "Ensure this field has no more than 255 characters."
    ))]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub contact: Option<String>,
    #[serde(default)]
    #[validate(length(max = 10, message = "Ensure this field has no more than 10 characters."))]
    pub postal_code: Option<String>,
}

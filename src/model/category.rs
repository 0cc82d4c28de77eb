use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct CategoryRequestDto {
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
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/auth/register`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct RegisterDto {
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 150,
            message = "Ensure this field is not blank and has no more than 150 characters."
        )
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(
            min = 8,
            message = "This password is too short. It must contain at least 8 characters."
        )
    )]
    pub password: Option<String>,
}

/// Body of `POST /api/auth/token`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenRequestDto {
    pub username: String,
    pub password: String,
}

/// Issued bearer token.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// The bearer token could not be decoded, has a bad signature or has expired.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Username and password did not match an active account.
    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    /// The token is valid but its user no longer exists or was deactivated.
    #[error("User {0} not found or inactive")]
    UserNotFound(i32),

    /// The authenticated user lacks a required permission.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Description of the permission that failed
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` / `UserNotFound` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level. Client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.",
            ),
            Self::InvalidToken(_) | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                "Given token not valid for any user.",
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "No active account found with the given credentials.",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

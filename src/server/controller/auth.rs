use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{RegisterDto, TokenDto, TokenRequestDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials},
        model::user::RegisterParams,
        service::user::UserService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new customer account.
///
/// Public endpoint. The account is created with the `user` role; becoming a seller
/// goes through a seller request.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid fields, or username/email already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    tracing::info!("Registered user '{}'", user.username);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange username and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Unknown user, wrong password or inactive account
#[utoipa::path(
    post,
    path = "/api/auth/token",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn token(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token = state.tokens.issue(&user)?;

    Ok((StatusCode::OK, Json(token)))
}

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discount::{DiscountDto, DiscountRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::discount::{Discount, DiscountParams},
        service::discount::DiscountService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping discount endpoints in OpenAPI documentation
pub static DISCOUNT_TAG: &str = "discount";

fn not_found() -> AppError {
    AppError::NotFound("Discount not found".to_string())
}

/// List all discounts ordered by code.
#[utoipa::path(
    get,
    path = "/api/discounts",
    tag = DISCOUNT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All discounts", body = Vec<DiscountDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discounts(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let discounts = DiscountService::new(&state.db).get_all().await?;

    let discounts: Vec<DiscountDto> = discounts.into_iter().map(Discount::into_dto).collect();

    Ok((StatusCode::OK, Json(discounts)))
}

/// Create a discount authored by the requesting admin.
///
/// # Access Control
/// - `Admin` - Only admins can manage discounts
///
/// # Returns
/// - `201 Created` - Discount created
/// - `400 Bad Request` - Invalid fields, duplicate `code`, unknown category or product,
///   or `valid_from` after `valid_until`
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/discounts",
    tag = DISCOUNT_TAG,
    security(("bearer" = [])),
    request_body = DiscountRequestDto,
    responses(
        (status = 201, description = "Discount created", body = DiscountDto),
        (status = 400, description = "Invalid discount data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discount(
    State(state): State<AppState>,
    credentials: Credentials,
    JsonBody(payload): JsonBody<DiscountRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = DiscountParams::from_dto(payload)?;

    let discount = DiscountService::new(&state.db).create(admin.id, params).await?;

    Ok((StatusCode::CREATED, Json(discount.into_dto())))
}

/// Get a discount by id.
#[utoipa::path(
    get,
    path = "/api/discounts/{id}",
    tag = DISCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Discount ID")),
    responses(
        (status = 200, description = "Discount details", body = DiscountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Discount not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discount(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let discount = DiscountService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(discount.into_dto())))
}

/// Update a discount.
///
/// # Access Control
/// - `Admin` - Only admins can manage discounts
#[utoipa::path(
    put,
    path = "/api/discounts/{id}",
    tag = DISCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Discount ID")),
    request_body = DiscountRequestDto,
    responses(
        (status = 200, description = "Discount updated", body = DiscountDto),
        (status = 400, description = "Invalid discount data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Discount not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_discount(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<DiscountRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let service = DiscountService::new(&state.db);

    if service.get_by_id(id).await?.is_none() {
        return Err(not_found());
    }

    let params = DiscountParams::from_dto(payload)?;

    let discount = service.update(id, params).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(discount.into_dto())))
}

/// Delete a discount.
///
/// # Access Control
/// - `Admin` - Only admins can manage discounts
#[utoipa::path(
    delete,
    path = "/api/discounts/{id}",
    tag = DISCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Discount ID")),
    responses(
        (status = 204, description = "Discount deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Discount not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_discount(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    if !DiscountService::new(&state.db).delete(id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        shop::{ShopDto, ShopRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::{
            shop::{Shop, ShopParams},
            user::User,
        },
        service::shop::ShopService,
        state::AppState,
        util::json::{merge_patch, JsonBody},
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shop";

/// Loads a shop owned by `user`.
///
/// Shops owned by someone else are reported as missing.
async fn load_owned(state: &AppState, id: i32, user: &User) -> Result<Shop, AppError> {
    let shop = ShopService::new(&state.db)
        .get_owned(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))?;

    Permission::Owner(shop.user_id).check(user)?;

    Ok(shop)
}

/// List the requester's shops.
///
/// Only shops owned by the requester are returned. This also holds for admins.
///
/// # Returns
/// - `200 OK` - Shops owned by the requester
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/shops",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Shops owned by the requester", body = Vec<ShopDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shops(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let shops = ShopService::new(&state.db).list_for_owner(user.id).await?;

    let shops: Vec<ShopDto> = shops.into_iter().map(Shop::into_dto).collect();

    Ok((StatusCode::OK, Json(shops)))
}

/// Create a shop owned by the requester.
///
/// # Returns
/// - `201 Created` - Shop created
/// - `400 Bad Request` - Missing or duplicate `shop_name`, or other invalid fields
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/shops",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    request_body = ShopRequestDto,
    responses(
        (status = 201, description = "Shop created", body = ShopDto),
        (status = 400, description = "Invalid shop data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shop(
    State(state): State<AppState>,
    credentials: Credentials,
    JsonBody(payload): JsonBody<ShopRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let params = ShopParams::from_dto(payload)?;

    let shop = ShopService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(shop.into_dto())))
}

/// Get one of the requester's shops.
///
/// # Access Control
/// - `Owner` - Shops of other users are reported as not found
///
/// # Returns
/// - `200 OK` - Shop details
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Shop missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Shop details", body = ShopDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let shop = load_owned(&state, id, &user).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Replace the writable fields of one of the requester's shops.
///
/// Validates the body like create. Omitted optional fields are cleared.
///
/// # Returns
/// - `200 OK` - Updated shop
/// - `400 Bad Request` - Invalid fields or duplicate `shop_name`
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Shop missing or owned by another user
#[utoipa::path(
    put,
    path = "/api/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = ShopRequestDto,
    responses(
        (status = 200, description = "Shop updated", body = ShopDto),
        (status = 400, description = "Invalid shop data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shop(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ShopRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let shop = load_owned(&state, id, &user).await?;

    let params = ShopParams::from_dto(payload)?;

    let shop = ShopService::new(&state.db).update(shop.id, params).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Update only the supplied fields of one of the requester's shops.
///
/// # Returns
/// - `200 OK` - Updated shop
/// - `400 Bad Request` - A supplied field is invalid
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Shop missing or owned by another user
#[utoipa::path(
    patch,
    path = "/api/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = ShopRequestDto,
    responses(
        (status = 200, description = "Shop updated", body = ShopDto),
        (status = 400, description = "Invalid shop data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_shop(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let shop = load_owned(&state, id, &user).await?;

    let merged = merge_patch(&shop.to_request_dto(), patch)?;
    let params = ShopParams::from_dto(merged)?;

    let shop = ShopService::new(&state.db).update(shop.id, params).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Delete one of the requester's shops with all of its products.
///
/// # Returns
/// - `204 No Content` - Shop deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Shop missing or owned by another user
#[utoipa::path(
    delete,
    path = "/api/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 204, description = "Shop deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let shop = load_owned(&state, id, &user).await?;

    ShopService::new(&state.db).delete(shop.id).await?;

    tracing::info!("User {} deleted shop {}", user.id, shop.id);

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        product::{
            CreateProductDto, InventoryDto, InventoryUpdateDto, PaginatedProductsDto, ProductDto,
            ProductQuery, ProductStatusUpdateDto, UpdateProductDto,
        },
    },
    server::{
        error::{validation::FieldErrors, AppError},
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::{
            product::{status_from_dto, CreateProductParams, Product, UpdateProductParams},
            user::User,
        },
        service::product::ProductService,
        state::AppState,
        util::json::{merge_patch, JsonBody},
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

/// Loads product `id` as visible to `user`.
async fn load_visible(state: &AppState, id: i32, user: &User) -> Result<Product, AppError> {
    ProductService::new(&state.db)
        .get_visible(id, user)
        .await?
        .ok_or_else(not_found)
}

/// Loads product `id` and requires `user` to be an admin or the shop owner.
async fn load_managed(state: &AppState, id: i32, user: &User) -> Result<Product, AppError> {
    let product = load_visible(state, id, user).await?;

    Permission::AdminOrOwner(product.owner_id).check(user)?;

    Ok(product)
}

/// Get a page of products.
///
/// Admins see every product, sellers see approved products plus all products of their
/// own shops, customers see approved products only.
///
/// # Returns
/// - `200 OK` - Page of products ordered by id
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let products = ProductService::new(&state.db)
        .get_paginated(
            &user,
            query.shop_id,
            query.category_id,
            query.page,
            query.per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Create a product in one of the requester's shops.
///
/// New products start as `pending` and get an inventory row with the supplied
/// `quantity` (default 0).
///
/// # Access Control
/// - `AdminOrSeller` - Sellers may only list into their own shops, admins into any shop
///
/// # Returns
/// - `201 Created` - Product created
/// - `400 Bad Request` - Invalid fields, unknown shop or category
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Customer, or shop owned by another seller
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to list into this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    credentials: Credentials,
    JsonBody(payload): JsonBody<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::AdminOrSeller])
        .await?;

    let params = CreateProductParams::from_dto(payload)?;

    let product = ProductService::new(&state.db).create(&user, params).await?;

    tracing::info!("User {} listed product {}", user.id, product.id);

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Get a product by id.
///
/// Products the requester can't see are reported as not found.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_visible(&state, id, &user).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Replace the writable fields of a product.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the owner of the product's shop
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the shop owner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_managed(&state, id, &user).await?;

    let params = UpdateProductParams::from_dto(payload)?;

    let product = ProductService::new(&state.db)
        .update(product.id, params)
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Update only the supplied fields of a product.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the owner of the product's shop
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the shop owner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_product(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_managed(&state, id, &user).await?;

    let merged = merge_patch(&product.to_update_dto(), patch)?;
    let params = UpdateProductParams::from_dto(merged)?;

    let product = ProductService::new(&state.db)
        .update(product.id, params)
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product with its inventory and category links.
///
/// Discounts targeting the product have their product cleared.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the owner of the product's shop
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the shop owner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_managed(&state, id, &user).await?;

    ProductService::new(&state.db).delete(product.id).await?;

    tracing::info!("User {} deleted product {}", user.id, product.id);

    Ok(StatusCode::NO_CONTENT)
}

/// Set the moderation status of a product.
///
/// # Access Control
/// - `Admin` - Only admins moderate products
#[utoipa::path(
    put,
    path = "/api/products/{id}/status",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductStatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = ProductDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_product_status(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ProductStatusUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let product = load_visible(&state, id, &user).await?;

    let product = ProductService::new(&state.db)
        .set_status(product.id, status_from_dto(payload.status))
        .await?;

    tracing::info!(
        "Admin {} set product {} status to {:?}",
        user.id,
        product.id,
        product.status
    );

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Get the stock level of a product.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the owner of the product's shop
#[utoipa::path(
    get,
    path = "/api/products/{id}/inventory",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Inventory", body = InventoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the shop owner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_managed(&state, id, &user).await?;

    let inventory = ProductService::new(&state.db)
        .get_inventory(product.id)
        .await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}

/// Set the stock level of a product.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the owner of the product's shop
#[utoipa::path(
    put,
    path = "/api/products/{id}/inventory",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = InventoryUpdateDto,
    responses(
        (status = 200, description = "Inventory updated", body = InventoryDto),
        (status = 400, description = "Negative quantity"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the shop owner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_inventory(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<InventoryUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let product = load_managed(&state, id, &user).await?;

    FieldErrors::of(&payload).into_result()?;

    let inventory = ProductService::new(&state.db)
        .set_inventory(product.id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}

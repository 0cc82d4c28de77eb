use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::category::{Category, CategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

fn not_found() -> AppError {
    AppError::NotFound("Category not found".to_string())
}

/// List all categories ordered by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let categories = CategoryService::new(&state.db).get_all().await?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
///
/// # Returns
/// - `201 Created` - Category created
/// - `400 Bad Request` - Missing or duplicate `name`
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    credentials: Credentials,
    JsonBody(payload): JsonBody<CategoryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = CategoryParams::from_dto(payload)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get a category by id.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let category = CategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Update a category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid category data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CategoryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    if service.get_by_id(id).await?.is_none() {
        return Err(not_found());
    }

    let params = CategoryParams::from_dto(payload)?;

    let category = service.update(id, params).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Products lose the link to the category. Discounts targeting it have their
/// category cleared.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    if !CategoryService::new(&state.db).delete(id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

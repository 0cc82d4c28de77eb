use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        seller_request::{CreateSellerRequestDto, SellerRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Credentials, Permission},
        model::seller_request::SellerRequest,
        service::seller_request::SellerRequestService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping seller request endpoints in OpenAPI documentation
pub static SELLER_REQUEST_TAG: &str = "seller_request";

/// Ask to be promoted to seller.
///
/// # Access Control
/// - `Customer` - Only customers can file a request
///
/// # Returns
/// - `201 Created` - Pending request created
/// - `400 Bad Request` - The requester already has a pending request
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Already a seller or admin
#[utoipa::path(
    post,
    path = "/api/seller-requests",
    tag = SELLER_REQUEST_TAG,
    security(("bearer" = [])),
    request_body = CreateSellerRequestDto,
    responses(
        (status = 201, description = "Request created", body = SellerRequestDto),
        (status = 400, description = "Pending request exists"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a customer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_seller_request(
    State(state): State<AppState>,
    credentials: Credentials,
    JsonBody(payload): JsonBody<CreateSellerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Customer])
        .await?;

    let request = SellerRequestService::new(&state.db)
        .create(user.id, payload.message)
        .await?;

    tracing::info!("User {} requested seller access", user.id);

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List seller requests, newest first.
///
/// Admins see every request, other users only their own.
#[utoipa::path(
    get,
    path = "/api/seller-requests",
    tag = SELLER_REQUEST_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Seller requests", body = Vec<SellerRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seller_requests(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let scope = if authorize(&user, Permission::Admin) {
        None
    } else {
        Some(user.id)
    };

    let requests = SellerRequestService::new(&state.db).list(scope).await?;

    let requests: Vec<SellerRequestDto> = requests
        .into_iter()
        .map(SellerRequest::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// Get a seller request.
///
/// # Access Control
/// - `AdminOrOwner` - Admins or the user who filed the request
#[utoipa::path(
    get,
    path = "/api/seller-requests/{id}",
    tag = SELLER_REQUEST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Seller request ID")),
    responses(
        (status = 200, description = "Seller request", body = SellerRequestDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Request filed by another user", body = ErrorDto),
        (status = 404, description = "Seller request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seller_request(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let request = SellerRequestService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Seller request not found".to_string()))?;

    Permission::AdminOrOwner(request.user_id).check(&user)?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Approve a pending seller request and promote the requester to seller.
///
/// # Access Control
/// - `Admin` - Only admins review requests
///
/// # Returns
/// - `200 OK` - Request approved
/// - `400 Bad Request` - Request is no longer pending
/// - `404 Not Found` - Request doesn't exist
#[utoipa::path(
    post,
    path = "/api/seller-requests/{id}/approve",
    tag = SELLER_REQUEST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Seller request ID")),
    responses(
        (status = 200, description = "Request approved", body = SellerRequestDto),
        (status = 400, description = "Request not pending"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_seller_request(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let request = SellerRequestService::new(&state.db).approve(id).await?;

    tracing::info!(
        "Admin {} approved seller request {} of user {}",
        admin.id,
        request.id,
        request.user_id
    );

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Reject a pending seller request.
///
/// # Access Control
/// - `Admin` - Only admins review requests
#[utoipa::path(
    post,
    path = "/api/seller-requests/{id}/reject",
    tag = SELLER_REQUEST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Seller request ID")),
    responses(
        (status = 200, description = "Request rejected", body = SellerRequestDto),
        (status = 400, description = "Request not pending"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_seller_request(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let request = SellerRequestService::new(&state.db).reject(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

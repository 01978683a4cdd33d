use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::AuthenticatedUser;
use crate::features::users::dto::{
    RegisterResponseDto, RegisterUserDto, UpdateUserDto, UserResponseDto,
};
use crate::features::users::service::UserService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// Register a new user and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = ApiResponse<RegisterResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email is already registered")
    ),
    tag = "users"
)]
pub async fn register_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<Json<ApiResponse<RegisterResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let registration = service.register(dto).await?;
    Ok(Json(ApiResponse::success(Some(registration), None)))
}

/// List users (requires authentication)
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListQuery),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get user by id (requires authentication)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User public id (UUID v4)")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let user = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(user), None)))
}

/// Update user by id (requires authentication)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User public id (UUID v4)")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("User update requested by {}", user.user_id);

    let updated = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(updated), None)))
}

/// Soft delete user by id (requires authentication)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User public id (UUID v4)")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<Object>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User deleted".to_string()),
    )))
}

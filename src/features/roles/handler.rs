use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::roles::dto::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::service::RoleService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List roles (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/roles",
    params(ListQuery),
    responses(
        (status = 200, description = "List of roles", body = ApiResponse<Vec<RoleResponseDto>>),
    ),
    tag = "roles"
)]
pub async fn list_roles(
    State(service): State<Arc<RoleService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<RoleResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get role by id
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    params(("id" = Uuid, Path, description = "Role public id (UUID v4)")),
    responses(
        (status = 200, description = "Role found", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn get_role(
    State(service): State<Arc<RoleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let role = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(role), None)))
}

/// Create a new role
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleDto,
    responses(
        (status = 200, description = "Role created", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Role already exists")
    ),
    tag = "roles"
)]
pub async fn create_role(
    State(service): State<Arc<RoleService>>,
    AppJson(dto): AppJson<CreateRoleDto>,
) -> Result<Json<ApiResponse<RoleResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let role = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(role), None)))
}

/// Update role by id
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    params(("id" = Uuid, Path, description = "Role public id (UUID v4)")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn update_role(
    State(service): State<Arc<RoleService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<ApiResponse<RoleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let role = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(role), None)))
}

/// Soft delete role by id
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(("id" = Uuid, Path, description = "Role public id (UUID v4)")),
    responses(
        (status = 200, description = "Role deleted", body = ApiResponse<Object>),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn delete_role(
    State(service): State<Arc<RoleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Role deleted".to_string()),
    )))
}

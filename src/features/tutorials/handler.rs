use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::tutorials::dto::{CreateTutorialDto, TutorialResponseDto, UpdateTutorialDto};
use crate::features::tutorials::service::TutorialService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List tutorials (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/tutorials",
    params(ListQuery),
    responses(
        (status = 200, description = "List of tutorials", body = ApiResponse<Vec<TutorialResponseDto>>),
    ),
    tag = "tutorials"
)]
pub async fn list_tutorials(
    State(service): State<Arc<TutorialService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<TutorialResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get tutorial by id
#[utoipa::path(
    get,
    path = "/api/tutorials/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    responses(
        (status = 200, description = "Tutorial found", body = ApiResponse<TutorialResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn get_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let tutorial = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Create a new tutorial
#[utoipa::path(
    post,
    path = "/api/tutorials",
    request_body = CreateTutorialDto,
    responses(
        (status = 200, description = "Tutorial created", body = ApiResponse<TutorialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Tutorial already exists")
    ),
    tag = "tutorials"
)]
pub async fn create_tutorial(
    State(service): State<Arc<TutorialService>>,
    AppJson(dto): AppJson<CreateTutorialDto>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tutorial = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Update tutorial by id
#[utoipa::path(
    put,
    path = "/api/tutorials/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    request_body = UpdateTutorialDto,
    responses(
        (status = 200, description = "Tutorial updated", body = ApiResponse<TutorialResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn update_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTutorialDto>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tutorial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Publish tutorial by id
#[utoipa::path(
    put,
    path = "/api/tutorials/publish/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    responses(
        (status = 200, description = "Tutorial published", body = ApiResponse<TutorialResponseDto>),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn publish_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let tutorial = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Unpublish tutorial by id
#[utoipa::path(
    put,
    path = "/api/tutorials/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    responses(
        (status = 200, description = "Tutorial unpublished", body = ApiResponse<TutorialResponseDto>),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn unpublish_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let tutorial = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Set featured flag on tutorial
#[utoipa::path(
    put,
    path = "/api/tutorials/featured/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    responses(
        (status = 200, description = "Tutorial featured", body = ApiResponse<TutorialResponseDto>),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn set_featured_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TutorialResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let tutorial = service.set_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(tutorial), None)))
}

/// Soft delete tutorial by id
#[utoipa::path(
    delete,
    path = "/api/tutorials/{id}",
    params(("id" = Uuid, Path, description = "Tutorial public id (UUID v4)")),
    responses(
        (status = 200, description = "Tutorial deleted", body = ApiResponse<Object>),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn delete_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Tutorial deleted".to_string()),
    )))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::design_categories::dto::{
    CreateDesignCategoryDto, DesignCategoryResponseDto, UpdateDesignCategoryDto,
};
use crate::features::design_categories::service::DesignCategoryService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List design categories (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/design-categories",
    params(ListQuery),
    responses(
        (status = 200, description = "List of design categories", body = ApiResponse<Vec<DesignCategoryResponseDto>>),
    ),
    tag = "design-categories"
)]
pub async fn list_design_categories(
    State(service): State<Arc<DesignCategoryService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<DesignCategoryResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get design category by id
#[utoipa::path(
    get,
    path = "/api/design-categories/{id}",
    params(("id" = Uuid, Path, description = "Design category public id (UUID v4)")),
    responses(
        (status = 200, description = "Design category found", body = ApiResponse<DesignCategoryResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Design category not found")
    ),
    tag = "design-categories"
)]
pub async fn get_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DesignCategoryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let category = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Create a new design category
#[utoipa::path(
    post,
    path = "/api/design-categories",
    request_body = CreateDesignCategoryDto,
    responses(
        (status = 200, description = "Design category created", body = ApiResponse<DesignCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Design category already exists")
    ),
    tag = "design-categories"
)]
pub async fn create_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    AppJson(dto): AppJson<CreateDesignCategoryDto>,
) -> Result<Json<ApiResponse<DesignCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Update design category by id
#[utoipa::path(
    put,
    path = "/api/design-categories/{id}",
    params(("id" = Uuid, Path, description = "Design category public id (UUID v4)")),
    request_body = UpdateDesignCategoryDto,
    responses(
        (status = 200, description = "Design category updated", body = ApiResponse<DesignCategoryResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Design category not found")
    ),
    tag = "design-categories"
)]
pub async fn update_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateDesignCategoryDto>,
) -> Result<Json<ApiResponse<DesignCategoryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Publish design category by id
#[utoipa::path(
    put,
    path = "/api/design-categories/publish/{id}",
    params(("id" = Uuid, Path, description = "Design category public id (UUID v4)")),
    responses(
        (status = 200, description = "Design category published", body = ApiResponse<DesignCategoryResponseDto>),
        (status = 404, description = "Design category not found")
    ),
    tag = "design-categories"
)]
pub async fn publish_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DesignCategoryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let category = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Unpublish design category by id
#[utoipa::path(
    put,
    path = "/api/design-categories/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Design category public id (UUID v4)")),
    responses(
        (status = 200, description = "Design category unpublished", body = ApiResponse<DesignCategoryResponseDto>),
        (status = 404, description = "Design category not found")
    ),
    tag = "design-categories"
)]
pub async fn unpublish_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DesignCategoryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let category = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Soft delete design category by id
#[utoipa::path(
    delete,
    path = "/api/design-categories/{id}",
    params(("id" = Uuid, Path, description = "Design category public id (UUID v4)")),
    responses(
        (status = 200, description = "Design category deleted", body = ApiResponse<Object>),
        (status = 404, description = "Design category not found")
    ),
    tag = "design-categories"
)]
pub async fn delete_design_category(
    State(service): State<Arc<DesignCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Design category deleted".to_string()),
    )))
}

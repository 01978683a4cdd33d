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
use crate::features::careers::dto::{CareerResponseDto, CreateCareerDto, UpdateCareerDto};
use crate::features::careers::service::CareerService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List career postings (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/careers",
    params(ListQuery),
    responses(
        (status = 200, description = "List of careers", body = ApiResponse<Vec<CareerResponseDto>>),
    ),
    tag = "careers"
)]
pub async fn list_careers(
    State(service): State<Arc<CareerService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<CareerResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get career by id
#[utoipa::path(
    get,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    responses(
        (status = 200, description = "Career found", body = ApiResponse<CareerResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Career not found")
    ),
    tag = "careers"
)]
pub async fn get_career(
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let career = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Create a new career posting
#[utoipa::path(
    post,
    path = "/api/careers",
    request_body = CreateCareerDto,
    responses(
        (status = 200, description = "Career created", body = ApiResponse<CareerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Career already exists")
    ),
    tag = "careers"
)]
pub async fn create_career(
    State(service): State<Arc<CareerService>>,
    AppJson(dto): AppJson<CreateCareerDto>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let career = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Update career by id (requires authentication)
#[utoipa::path(
    put,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    request_body = UpdateCareerDto,
    responses(
        (status = 200, description = "Career updated", body = ApiResponse<CareerResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Career not found")
    ),
    tag = "careers",
    security(("bearer_auth" = []))
)]
pub async fn update_career(
    user: AuthenticatedUser,
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCareerDto>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Career update requested by {}", user.user_id);

    let career = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Publish career by id
#[utoipa::path(
    put,
    path = "/api/careers/publish/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    responses(
        (status = 200, description = "Career published", body = ApiResponse<CareerResponseDto>),
        (status = 404, description = "Career not found")
    ),
    tag = "careers"
)]
pub async fn publish_career(
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let career = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Unpublish career by id
#[utoipa::path(
    put,
    path = "/api/careers/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    responses(
        (status = 200, description = "Career unpublished", body = ApiResponse<CareerResponseDto>),
        (status = 404, description = "Career not found")
    ),
    tag = "careers"
)]
pub async fn unpublish_career(
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let career = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Set featured flag on career
#[utoipa::path(
    put,
    path = "/api/careers/featured/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    responses(
        (status = 200, description = "Career featured", body = ApiResponse<CareerResponseDto>),
        (status = 404, description = "Career not found")
    ),
    tag = "careers"
)]
pub async fn set_featured_career(
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CareerResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let career = service.set_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(career), None)))
}

/// Soft delete career by id
#[utoipa::path(
    delete,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career public id (UUID v4)")),
    responses(
        (status = 200, description = "Career deleted", body = ApiResponse<Object>),
        (status = 404, description = "Career not found")
    ),
    tag = "careers"
)]
pub async fn delete_career(
    State(service): State<Arc<CareerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Career deleted".to_string()),
    )))
}

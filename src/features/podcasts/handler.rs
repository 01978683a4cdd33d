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
use crate::features::podcasts::dto::{CreatePodcastDto, PodcastResponseDto, UpdatePodcastDto};
use crate::features::podcasts::service::PodcastService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List podcasts (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/podcasts",
    params(ListQuery),
    responses(
        (status = 200, description = "List of podcasts", body = ApiResponse<Vec<PodcastResponseDto>>),
    ),
    tag = "podcasts"
)]
pub async fn list_podcasts(
    State(service): State<Arc<PodcastService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<PodcastResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get podcast by id
#[utoipa::path(
    get,
    path = "/api/podcasts/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    responses(
        (status = 200, description = "Podcast found", body = ApiResponse<PodcastResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts"
)]
pub async fn get_podcast(
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let podcast = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Create a new podcast
#[utoipa::path(
    post,
    path = "/api/podcasts",
    request_body = CreatePodcastDto,
    responses(
        (status = 200, description = "Podcast created", body = ApiResponse<PodcastResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Podcast already exists")
    ),
    tag = "podcasts"
)]
pub async fn create_podcast(
    State(service): State<Arc<PodcastService>>,
    AppJson(dto): AppJson<CreatePodcastDto>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let podcast = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Update podcast by id (requires authentication)
#[utoipa::path(
    put,
    path = "/api/podcasts/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    request_body = UpdatePodcastDto,
    responses(
        (status = 200, description = "Podcast updated", body = ApiResponse<PodcastResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts",
    security(("bearer_auth" = []))
)]
pub async fn update_podcast(
    user: AuthenticatedUser,
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdatePodcastDto>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Podcast update requested by {}", user.user_id);

    let podcast = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Publish podcast by id
#[utoipa::path(
    put,
    path = "/api/podcasts/publish/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    responses(
        (status = 200, description = "Podcast published", body = ApiResponse<PodcastResponseDto>),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts"
)]
pub async fn publish_podcast(
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let podcast = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Unpublish podcast by id
#[utoipa::path(
    put,
    path = "/api/podcasts/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    responses(
        (status = 200, description = "Podcast unpublished", body = ApiResponse<PodcastResponseDto>),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts"
)]
pub async fn unpublish_podcast(
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let podcast = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Set featured flag on podcast
#[utoipa::path(
    put,
    path = "/api/podcasts/featured/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    responses(
        (status = 200, description = "Podcast featured", body = ApiResponse<PodcastResponseDto>),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts"
)]
pub async fn set_featured_podcast(
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PodcastResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let podcast = service.set_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(podcast), None)))
}

/// Soft delete podcast by id
#[utoipa::path(
    delete,
    path = "/api/podcasts/{id}",
    params(("id" = Uuid, Path, description = "Podcast public id (UUID v4)")),
    responses(
        (status = 200, description = "Podcast deleted", body = ApiResponse<Object>),
        (status = 404, description = "Podcast not found")
    ),
    tag = "podcasts"
)]
pub async fn delete_podcast(
    State(service): State<Arc<PodcastService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Podcast deleted".to_string()),
    )))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::newsletters::dto::{
    CreateNewsletterDto, NewsletterResponseDto, UpdateNewsletterDto,
};
use crate::features::newsletters::service::NewsletterService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List newsletter subscriptions (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/newsletters",
    params(ListQuery),
    responses(
        (status = 200, description = "List of subscriptions", body = ApiResponse<Vec<NewsletterResponseDto>>),
    ),
    tag = "newsletters"
)]
pub async fn list_newsletters(
    State(service): State<Arc<NewsletterService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<NewsletterResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get newsletter subscription by id
#[utoipa::path(
    get,
    path = "/api/newsletters/{id}",
    params(("id" = Uuid, Path, description = "Subscription public id (UUID v4)")),
    responses(
        (status = 200, description = "Subscription found", body = ApiResponse<NewsletterResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Subscription not found")
    ),
    tag = "newsletters"
)]
pub async fn get_newsletter(
    State(service): State<Arc<NewsletterService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NewsletterResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let subscription = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(subscription), None)))
}

/// Subscribe an email to the newsletter
#[utoipa::path(
    post,
    path = "/api/newsletters",
    request_body = CreateNewsletterDto,
    responses(
        (status = 200, description = "Subscription created", body = ApiResponse<NewsletterResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email is already subscribed")
    ),
    tag = "newsletters"
)]
pub async fn create_newsletter(
    State(service): State<Arc<NewsletterService>>,
    AppJson(dto): AppJson<CreateNewsletterDto>,
) -> Result<Json<ApiResponse<NewsletterResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subscription = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(subscription), None)))
}

/// Update newsletter subscription by id
#[utoipa::path(
    put,
    path = "/api/newsletters/{id}",
    params(("id" = Uuid, Path, description = "Subscription public id (UUID v4)")),
    request_body = UpdateNewsletterDto,
    responses(
        (status = 200, description = "Subscription updated", body = ApiResponse<NewsletterResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Subscription not found")
    ),
    tag = "newsletters"
)]
pub async fn update_newsletter(
    State(service): State<Arc<NewsletterService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateNewsletterDto>,
) -> Result<Json<ApiResponse<NewsletterResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subscription = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(subscription), None)))
}

/// Soft delete newsletter subscription by id
#[utoipa::path(
    delete,
    path = "/api/newsletters/{id}",
    params(("id" = Uuid, Path, description = "Subscription public id (UUID v4)")),
    responses(
        (status = 200, description = "Subscription deleted", body = ApiResponse<Object>),
        (status = 404, description = "Subscription not found")
    ),
    tag = "newsletters"
)]
pub async fn delete_newsletter(
    State(service): State<Arc<NewsletterService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Newsletter subscription deleted".to_string()),
    )))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::articles::dto::{ArticleResponseDto, CreateArticleDto, UpdateArticleDto};
use crate::features::articles::service::ArticleService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List articles (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/articles",
    params(ListQuery),
    responses(
        (status = 200, description = "List of articles", body = ApiResponse<Vec<ArticleResponseDto>>),
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(service): State<Arc<ArticleService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ArticleResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get article by id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<ArticleResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let article = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Create a new article
#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleDto,
    responses(
        (status = 200, description = "Article created", body = ApiResponse<ArticleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Article already exists")
    ),
    tag = "articles"
)]
pub async fn create_article(
    State(service): State<Arc<ArticleService>>,
    AppJson(dto): AppJson<CreateArticleDto>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let article = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Update article by id
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ApiResponse<ArticleResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn update_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateArticleDto>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let article = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Publish article by id
#[utoipa::path(
    put,
    path = "/api/articles/publish/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    responses(
        (status = 200, description = "Article published", body = ApiResponse<ArticleResponseDto>),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn publish_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let article = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Unpublish article by id
#[utoipa::path(
    put,
    path = "/api/articles/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    responses(
        (status = 200, description = "Article unpublished", body = ApiResponse<ArticleResponseDto>),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn unpublish_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let article = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Set featured flag on article
#[utoipa::path(
    put,
    path = "/api/articles/featured/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    responses(
        (status = 200, description = "Article featured", body = ApiResponse<ArticleResponseDto>),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn set_featured_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let article = service.set_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None)))
}

/// Soft delete article by id
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article public id (UUID v4)")),
    responses(
        (status = 200, description = "Article deleted", body = ApiResponse<Object>),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn delete_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Article deleted".to_string()),
    )))
}

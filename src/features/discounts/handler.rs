use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::discounts::dto::{CreateDiscountDto, DiscountResponseDto, UpdateDiscountDto};
use crate::features::discounts::service::DiscountService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List discounts (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/discounts",
    params(ListQuery),
    responses(
        (status = 200, description = "List of discounts", body = ApiResponse<Vec<DiscountResponseDto>>),
    ),
    tag = "discounts"
)]
pub async fn list_discounts(
    State(service): State<Arc<DiscountService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<DiscountResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get discount by id
#[utoipa::path(
    get,
    path = "/api/discounts/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    responses(
        (status = 200, description = "Discount found", body = ApiResponse<DiscountResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn get_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let discount = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Create a new discount
#[utoipa::path(
    post,
    path = "/api/discounts",
    request_body = CreateDiscountDto,
    responses(
        (status = 200, description = "Discount created", body = ApiResponse<DiscountResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Discount already exists")
    ),
    tag = "discounts"
)]
pub async fn create_discount(
    State(service): State<Arc<DiscountService>>,
    AppJson(dto): AppJson<CreateDiscountDto>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let discount = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Update discount by id
#[utoipa::path(
    put,
    path = "/api/discounts/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    request_body = UpdateDiscountDto,
    responses(
        (status = 200, description = "Discount updated", body = ApiResponse<DiscountResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn update_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateDiscountDto>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let discount = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Publish discount by id
#[utoipa::path(
    put,
    path = "/api/discounts/publish/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    responses(
        (status = 200, description = "Discount published", body = ApiResponse<DiscountResponseDto>),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn publish_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let discount = service.publish(id).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Unpublish discount by id
#[utoipa::path(
    put,
    path = "/api/discounts/unpublish/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    responses(
        (status = 200, description = "Discount unpublished", body = ApiResponse<DiscountResponseDto>),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn unpublish_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let discount = service.unpublish(id).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Set featured flag on discount
#[utoipa::path(
    put,
    path = "/api/discounts/featured/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    responses(
        (status = 200, description = "Discount featured", body = ApiResponse<DiscountResponseDto>),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn set_featured_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DiscountResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let discount = service.set_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(discount), None)))
}

/// Soft delete discount by id
#[utoipa::path(
    delete,
    path = "/api/discounts/{id}",
    params(("id" = Uuid, Path, description = "Discount public id (UUID v4)")),
    responses(
        (status = 200, description = "Discount deleted", body = ApiResponse<Object>),
        (status = 404, description = "Discount not found")
    ),
    tag = "discounts"
)]
pub async fn delete_discount(
    State(service): State<Arc<DiscountService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Discount deleted".to_string()),
    )))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::countries::dto::{CountryResponseDto, CreateCountryDto, UpdateCountryDto};
use crate::features::countries::service::CountryService;
use crate::shared::types::{ApiResponse, ListQuery};
use crate::shared::validation::ensure_uuid_v4;

/// List countries (paginated, searchable)
#[utoipa::path(
    get,
    path = "/api/countries",
    params(ListQuery),
    responses(
        (status = 200, description = "List of countries", body = ApiResponse<Vec<CountryResponseDto>>),
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<CountryResponseDto>>>> {
    let (count, data) = service.list(&query).await?;
    Ok(Json(ApiResponse::list(count, data)))
}

/// Get country by id
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    params(("id" = Uuid, Path, description = "Country public id (UUID v4)")),
    responses(
        (status = 200, description = "Country found", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    let country = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(country), None)))
}

/// Create a new country
#[utoipa::path(
    post,
    path = "/api/countries",
    request_body = CreateCountryDto,
    responses(
        (status = 200, description = "Country created", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Country already exists")
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<CreateCountryDto>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(country), None)))
}

/// Update country by id
#[utoipa::path(
    put,
    path = "/api/countries/{id}",
    params(("id" = Uuid, Path, description = "Country public id (UUID v4)")),
    request_body = UpdateCountryDto,
    responses(
        (status = 200, description = "Country updated", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Invalid UUID or payload"),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn update_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCountryDto>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let id = ensure_uuid_v4(id)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(country), None)))
}

/// Soft delete country by id
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    params(("id" = Uuid, Path, description = "Country public id (UUID v4)")),
    responses(
        (status = 200, description = "Country deleted", body = ApiResponse<Object>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn delete_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ensure_uuid_v4(id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Country deleted".to_string()),
    )))
}

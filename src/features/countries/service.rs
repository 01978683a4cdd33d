use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::countries::dto::{CountryResponseDto, CreateCountryDto, UpdateCountryDto};
use crate::features::countries::model::Country;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for country operations
pub struct CountryService {
    repo: LifecycleRepo<Country>,
}

impl CountryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<CountryResponseDto>)> {
        let (total, countries) = self.repo.list(query).await?;
        Ok((total, countries.into_iter().map(|c| c.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<CountryResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new country. Codes are unique among active rows.
    pub async fn create(&self, dto: CreateCountryDto) -> Result<CountryResponseDto> {
        let sql = format!(
            "INSERT INTO countries (public_id, name, code, status) \
             VALUES ($1, $2, $3, TRUE) \
             RETURNING {}",
            Country::COLUMNS
        );
        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&dto.code)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Country already exists"))?;

        tracing::info!(
            "Country created: id={}, code={}",
            country.public_id,
            country.code
        );

        Ok(country.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCountryDto) -> Result<CountryResponseDto> {
        let sql = format!(
            "UPDATE countries SET \
             name = COALESCE($2, name), \
             code = COALESCE($3, code), \
             status = COALESCE($4, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Country::COLUMNS
        );
        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.code)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Country already exists"))?;

        country
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Country '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let country = self.repo.soft_delete(id).await?;
        tracing::info!("Country soft deleted: id={}", country.public_id);
        Ok(())
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::discounts::dto::{CreateDiscountDto, DiscountResponseDto, UpdateDiscountDto};
use crate::features::discounts::model::Discount;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for discount operations
pub struct DiscountService {
    repo: LifecycleRepo<Discount>,
}

impl DiscountService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<DiscountResponseDto>)> {
        let (total, discounts) = self.repo.list(query).await?;
        Ok((total, discounts.into_iter().map(|d| d.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<DiscountResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new discount. Codes are unique among active rows.
    pub async fn create(&self, dto: CreateDiscountDto) -> Result<DiscountResponseDto> {
        let sql = format!(
            "INSERT INTO discounts \
             (public_id, name, position, code, card_text, banner_text, url, \
              published_start_date, published_end_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE) \
             RETURNING {}",
            Discount::COLUMNS
        );
        let discount = sqlx::query_as::<_, Discount>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(dto.position)
            .bind(&dto.code)
            .bind(&dto.card_text)
            .bind(&dto.banner_text)
            .bind(&dto.url)
            .bind(dto.published_start_date)
            .bind(dto.published_end_date)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Discount already exists"))?;

        tracing::info!("Discount created: id={}", discount.public_id);

        Ok(discount.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateDiscountDto) -> Result<DiscountResponseDto> {
        let sql = format!(
            "UPDATE discounts SET \
             name = COALESCE($2, name), \
             position = COALESCE($3, position), \
             code = COALESCE($4, code), \
             card_text = COALESCE($5, card_text), \
             banner_text = COALESCE($6, banner_text), \
             url = COALESCE($7, url), \
             published_start_date = COALESCE($8, published_start_date), \
             published_end_date = COALESCE($9, published_end_date), \
             is_published = COALESCE($10, is_published), \
             is_featured = COALESCE($11, is_featured), \
             status = COALESCE($12, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Discount::COLUMNS
        );
        let discount = sqlx::query_as::<_, Discount>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.position)
            .bind(&dto.code)
            .bind(&dto.card_text)
            .bind(&dto.banner_text)
            .bind(&dto.url)
            .bind(dto.published_start_date)
            .bind(dto.published_end_date)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Discount already exists"))?;

        discount
            .map(|d| d.into())
            .ok_or_else(|| AppError::NotFound(format!("Discount '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<DiscountResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<DiscountResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn set_featured(&self, id: Uuid) -> Result<DiscountResponseDto> {
        Ok(self.repo.set_featured(id).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let discount = self.repo.soft_delete(id).await?;
        tracing::info!("Discount soft deleted: id={}", discount.public_id);
        Ok(())
    }
}

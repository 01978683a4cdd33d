use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::careers::dto::{CareerResponseDto, CreateCareerDto, UpdateCareerDto};
use crate::features::careers::model::Career;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for career posting operations
pub struct CareerService {
    repo: LifecycleRepo<Career>,
}

impl CareerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<CareerResponseDto>)> {
        let (total, careers) = self.repo.list(query).await?;
        Ok((total, careers.into_iter().map(|c| c.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<CareerResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new career posting. Slugs are unique among active rows.
    pub async fn create(&self, dto: CreateCareerDto) -> Result<CareerResponseDto> {
        let slug = slug::slugify(&dto.name);

        let sql = format!(
            "INSERT INTO careers \
             (public_id, name, slug, work_type, profession_id, description, company, \
              company_website, location, email_apply, apply_email, apply_link, color, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, TRUE) \
             RETURNING {}",
            Career::COLUMNS
        );
        let career = sqlx::query_as::<_, Career>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.work_type)
            .bind(dto.profession_id)
            .bind(&dto.description)
            .bind(&dto.company)
            .bind(&dto.company_website)
            .bind(&dto.location)
            .bind(dto.email_apply.unwrap_or(false))
            .bind(&dto.apply_email)
            .bind(&dto.apply_link)
            .bind(&dto.color)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Career already exists"))?;

        tracing::info!("Career created: id={}, slug={}", career.public_id, slug);

        Ok(career.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCareerDto) -> Result<CareerResponseDto> {
        let slug = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE careers SET \
             name = COALESCE($2, name), \
             slug = COALESCE($3, slug), \
             work_type = COALESCE($4, work_type), \
             profession_id = COALESCE($5, profession_id), \
             description = COALESCE($6, description), \
             company = COALESCE($7, company), \
             company_website = COALESCE($8, company_website), \
             location = COALESCE($9, location), \
             email_apply = COALESCE($10, email_apply), \
             apply_email = COALESCE($11, apply_email), \
             apply_link = COALESCE($12, apply_link), \
             color = COALESCE($13, color), \
             is_published = COALESCE($14, is_published), \
             is_featured = COALESCE($15, is_featured), \
             status = COALESCE($16, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Career::COLUMNS
        );
        let career = sqlx::query_as::<_, Career>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.work_type)
            .bind(dto.profession_id)
            .bind(&dto.description)
            .bind(&dto.company)
            .bind(&dto.company_website)
            .bind(&dto.location)
            .bind(dto.email_apply)
            .bind(&dto.apply_email)
            .bind(&dto.apply_link)
            .bind(&dto.color)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Career already exists"))?;

        career
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Career '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<CareerResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<CareerResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn set_featured(&self, id: Uuid) -> Result<CareerResponseDto> {
        Ok(self.repo.set_featured(id).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let career = self.repo.soft_delete(id).await?;
        tracing::info!("Career soft deleted: id={}", career.public_id);
        Ok(())
    }
}

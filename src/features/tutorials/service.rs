use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::tutorials::dto::{CreateTutorialDto, TutorialResponseDto, UpdateTutorialDto};
use crate::features::tutorials::model::Tutorial;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for tutorial operations
pub struct TutorialService {
    repo: LifecycleRepo<Tutorial>,
}

impl TutorialService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<TutorialResponseDto>)> {
        let (total, tutorials) = self.repo.list(query).await?;
        Ok((total, tutorials.into_iter().map(|t| t.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<TutorialResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new tutorial. Duplicate slugs among active rows are rejected
    /// by the unique index and surfaced as Conflict.
    pub async fn create(&self, dto: CreateTutorialDto) -> Result<TutorialResponseDto> {
        let slug = slug::slugify(&dto.name);

        let sql = format!(
            "INSERT INTO tutorials \
             (public_id, design_category_id, name, slug, description, embed, duration, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE) \
             RETURNING {}",
            Tutorial::COLUMNS
        );
        let tutorial = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(Uuid::new_v4())
            .bind(dto.design_category_id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.description)
            .bind(&dto.embed)
            .bind(dto.duration)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Tutorial already exists"))?;

        tracing::info!("Tutorial created: id={}, slug={}", tutorial.public_id, slug);

        Ok(tutorial.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateTutorialDto) -> Result<TutorialResponseDto> {
        let slug = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE tutorials SET \
             name = COALESCE($2, name), \
             slug = COALESCE($3, slug), \
             design_category_id = COALESCE($4, design_category_id), \
             description = COALESCE($5, description), \
             embed = COALESCE($6, embed), \
             duration = COALESCE($7, duration), \
             is_published = COALESCE($8, is_published), \
             is_featured = COALESCE($9, is_featured), \
             status = COALESCE($10, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Tutorial::COLUMNS
        );
        let tutorial = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(dto.design_category_id)
            .bind(&dto.description)
            .bind(&dto.embed)
            .bind(dto.duration)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Tutorial already exists"))?;

        tutorial
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Tutorial '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<TutorialResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<TutorialResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn set_featured(&self, id: Uuid) -> Result<TutorialResponseDto> {
        Ok(self.repo.set_featured(id).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let tutorial = self.repo.soft_delete(id).await?;
        tracing::info!("Tutorial soft deleted: id={}", tutorial.public_id);
        Ok(())
    }
}

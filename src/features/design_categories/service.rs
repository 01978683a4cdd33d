use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::design_categories::dto::{
    CreateDesignCategoryDto, DesignCategoryResponseDto, UpdateDesignCategoryDto,
};
use crate::features::design_categories::model::DesignCategory;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for design category operations
pub struct DesignCategoryService {
    repo: LifecycleRepo<DesignCategory>,
}

impl DesignCategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<DesignCategoryResponseDto>)> {
        let (total, categories) = self.repo.list(query).await?;
        Ok((total, categories.into_iter().map(|c| c.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<DesignCategoryResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    pub async fn create(&self, dto: CreateDesignCategoryDto) -> Result<DesignCategoryResponseDto> {
        let slug = slug::slugify(&dto.name);
        let language = dto.language.unwrap_or_else(|| "tr".to_string());

        let sql = format!(
            "INSERT INTO design_categories \
             (public_id, name, slug, language, position, status) \
             VALUES ($1, $2, $3, $4, $5, TRUE) \
             RETURNING {}",
            DesignCategory::COLUMNS
        );
        let category = sqlx::query_as::<_, DesignCategory>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&slug)
            .bind(&language)
            .bind(dto.position)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Design category already exists"))?;

        tracing::info!(
            "Design category created: id={}, slug={}",
            category.public_id,
            slug
        );

        Ok(category.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateDesignCategoryDto,
    ) -> Result<DesignCategoryResponseDto> {
        let slug = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE design_categories SET \
             name = COALESCE($2, name), \
             slug = COALESCE($3, slug), \
             language = COALESCE($4, language), \
             position = COALESCE($5, position), \
             is_published = COALESCE($6, is_published), \
             status = COALESCE($7, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            DesignCategory::COLUMNS
        );
        let category = sqlx::query_as::<_, DesignCategory>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.language)
            .bind(dto.position)
            .bind(dto.is_published)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Design category already exists"))?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Design category '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<DesignCategoryResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<DesignCategoryResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let category = self.repo.soft_delete(id).await?;
        tracing::info!("Design category soft deleted: id={}", category.public_id);
        Ok(())
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::articles::dto::{ArticleResponseDto, CreateArticleDto, UpdateArticleDto};
use crate::features::articles::model::Article;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for article operations
pub struct ArticleService {
    repo: LifecycleRepo<Article>,
}

impl ArticleService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    /// List active articles with total count
    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<ArticleResponseDto>)> {
        let (total, articles) = self.repo.list(query).await?;
        Ok((total, articles.into_iter().map(|a| a.into()).collect()))
    }

    /// Get article by public id
    pub async fn get(&self, id: Uuid) -> Result<ArticleResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new article. The slug is derived from the name; duplicates
    /// among active rows are rejected by the storage-layer unique index.
    pub async fn create(&self, dto: CreateArticleDto) -> Result<ArticleResponseDto> {
        let slug = slug::slugify(&dto.name);

        let sql = format!(
            "INSERT INTO articles \
             (public_id, design_category_id, user_id, name, slug, content, cover_img, word_count, read_time, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE) \
             RETURNING {}",
            Article::COLUMNS
        );
        let article = sqlx::query_as::<_, Article>(&sql)
            .bind(Uuid::new_v4())
            .bind(dto.design_category_id)
            .bind(dto.user_id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.content)
            .bind(&dto.cover_img)
            .bind(dto.word_count)
            .bind(dto.read_time)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Article already exists"))?;

        tracing::info!("Article created: id={}, slug={}", article.public_id, slug);

        Ok(article.into())
    }

    /// Partial field patch. Status changes only when the payload includes it.
    pub async fn update(&self, id: Uuid, dto: UpdateArticleDto) -> Result<ArticleResponseDto> {
        let slug = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE articles SET \
             name = COALESCE($2, name), \
             slug = COALESCE($3, slug), \
             design_category_id = COALESCE($4, design_category_id), \
             content = COALESCE($5, content), \
             cover_img = COALESCE($6, cover_img), \
             word_count = COALESCE($7, word_count), \
             read_time = COALESCE($8, read_time), \
             is_published = COALESCE($9, is_published), \
             is_featured = COALESCE($10, is_featured), \
             status = COALESCE($11, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Article::COLUMNS
        );
        let article = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(dto.design_category_id)
            .bind(&dto.content)
            .bind(&dto.cover_img)
            .bind(dto.word_count)
            .bind(dto.read_time)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Article already exists"))?;

        article
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<ArticleResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<ArticleResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn set_featured(&self, id: Uuid) -> Result<ArticleResponseDto> {
        Ok(self.repo.set_featured(id).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let article = self.repo.soft_delete(id).await?;
        tracing::info!("Article soft deleted: id={}", article.public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn slug_is_lowercase_hyphenated() {
        assert_eq!(slug::slugify("My First Post"), "my-first-post");
        assert_eq!(slug::slugify("  Design & Code!  "), "design-code");
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::podcasts::dto::{CreatePodcastDto, PodcastResponseDto, UpdatePodcastDto};
use crate::features::podcasts::model::Podcast;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for podcast operations
pub struct PodcastService {
    repo: LifecycleRepo<Podcast>,
}

impl PodcastService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<PodcastResponseDto>)> {
        let (total, podcasts) = self.repo.list(query).await?;
        Ok((total, podcasts.into_iter().map(|p| p.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<PodcastResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    pub async fn create(&self, dto: CreatePodcastDto) -> Result<PodcastResponseDto> {
        let slug = slug::slugify(&dto.name);

        let sql = format!(
            "INSERT INTO podcasts \
             (public_id, name, slug, description, person, person_career, embed, spotify_embed, duration, language, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE) \
             RETURNING {}",
            Podcast::COLUMNS
        );
        let podcast = sqlx::query_as::<_, Podcast>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.description)
            .bind(&dto.person)
            .bind(&dto.person_career)
            .bind(&dto.embed)
            .bind(&dto.spotify_embed)
            .bind(dto.duration)
            .bind(&dto.language)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Podcast already exists"))?;

        tracing::info!("Podcast created: id={}, slug={}", podcast.public_id, slug);

        Ok(podcast.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdatePodcastDto) -> Result<PodcastResponseDto> {
        let slug = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE podcasts SET \
             name = COALESCE($2, name), \
             slug = COALESCE($3, slug), \
             description = COALESCE($4, description), \
             person = COALESCE($5, person), \
             person_career = COALESCE($6, person_career), \
             embed = COALESCE($7, embed), \
             spotify_embed = COALESCE($8, spotify_embed), \
             duration = COALESCE($9, duration), \
             language = COALESCE($10, language), \
             is_published = COALESCE($11, is_published), \
             is_featured = COALESCE($12, is_featured), \
             status = COALESCE($13, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Podcast::COLUMNS
        );
        let podcast = sqlx::query_as::<_, Podcast>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&slug)
            .bind(&dto.description)
            .bind(&dto.person)
            .bind(&dto.person_career)
            .bind(&dto.embed)
            .bind(&dto.spotify_embed)
            .bind(dto.duration)
            .bind(&dto.language)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Podcast already exists"))?;

        podcast
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Podcast '{}' not found", id)))
    }

    pub async fn publish(&self, id: Uuid) -> Result<PodcastResponseDto> {
        Ok(self.repo.set_published(id, true).await?.into())
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<PodcastResponseDto> {
        Ok(self.repo.set_published(id, false).await?.into())
    }

    pub async fn set_featured(&self, id: Uuid) -> Result<PodcastResponseDto> {
        Ok(self.repo.set_featured(id).await?.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let podcast = self.repo.soft_delete(id).await?;
        tracing::info!("Podcast soft deleted: id={}", podcast.public_id);
        Ok(())
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::newsletters::dto::{
    CreateNewsletterDto, NewsletterResponseDto, UpdateNewsletterDto,
};
use crate::features::newsletters::model::Newsletter;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for newsletter subscription operations
pub struct NewsletterService {
    repo: LifecycleRepo<Newsletter>,
}

impl NewsletterService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<NewsletterResponseDto>)> {
        let (total, subscriptions) = self.repo.list(query).await?;
        Ok((total, subscriptions.into_iter().map(|n| n.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<NewsletterResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Subscribe an email. Emails are unique among active rows.
    pub async fn create(&self, dto: CreateNewsletterDto) -> Result<NewsletterResponseDto> {
        let sql = format!(
            "INSERT INTO newsletters (public_id, first_name, last_name, email, interests, status) \
             VALUES ($1, $2, $3, $4, $5, TRUE) \
             RETURNING {}",
            Newsletter::COLUMNS
        );
        let subscription = sqlx::query_as::<_, Newsletter>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(&dto.interests)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Email is already subscribed"))?;

        tracing::info!("Newsletter subscription created: id={}", subscription.public_id);

        Ok(subscription.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateNewsletterDto,
    ) -> Result<NewsletterResponseDto> {
        let sql = format!(
            "UPDATE newsletters SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             email = COALESCE($4, email), \
             interests = COALESCE($5, interests), \
             status = COALESCE($6, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Newsletter::COLUMNS
        );
        let subscription = sqlx::query_as::<_, Newsletter>(&sql)
            .bind(id)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(&dto.interests)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Email is already subscribed"))?;

        subscription
            .map(|n| n.into())
            .ok_or_else(|| AppError::NotFound(format!("Newsletter subscription '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let subscription = self.repo.soft_delete(id).await?;
        tracing::info!(
            "Newsletter subscription soft deleted: id={}",
            subscription.public_id
        );
        Ok(())
    }
}

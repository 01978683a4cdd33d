use std::sync::Arc;

use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::auth::TokenService;
use crate::features::users::dto::{
    RegisterResponseDto, RegisterUserDto, UpdateUserDto, UserResponseDto,
};
use crate::features::users::model::User;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for user operations
pub struct UserService {
    repo: LifecycleRepo<User>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
            tokens,
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<UserResponseDto>)> {
        let (total, users) = self.repo.list(query).await?;
        Ok((total, users.into_iter().map(|u| u.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<UserResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Register a new user and issue a bearer token. Emails are unique among
    /// active rows; the password is stored as a SHA-256 hex digest.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<RegisterResponseDto> {
        let password_hash = hex::encode(Sha256::digest(dto.password.as_bytes()));
        let verification_code = Uuid::new_v4().simple().to_string();

        let sql = format!(
            "INSERT INTO users \
             (public_id, name, email, password, email_verification_code, status) \
             VALUES ($1, $2, $3, $4, $5, TRUE) \
             RETURNING {}",
            User::COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&password_hash)
            .bind(&verification_code)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Email is already registered"))?;

        let token = self.tokens.issue(user.public_id, &user.email)?;

        tracing::info!("User registered: id={}", user.public_id);

        Ok(RegisterResponseDto {
            token,
            user: user.into(),
        })
    }

    pub async fn update(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let sql = format!(
            "UPDATE users SET \
             name = COALESCE($2, name), \
             bio = COALESCE($3, bio), \
             hair_color = COALESCE($4, hair_color), \
             favorite_food = COALESCE($5, favorite_food), \
             status = COALESCE($6, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            User::COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.bio)
            .bind(&dto.hair_color)
            .bind(&dto.favorite_food)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let user = self.repo.soft_delete(id).await?;
        tracing::info!("User soft deleted: id={}", user.public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_digest_is_hex_sha256() {
        let digest = hex::encode(Sha256::digest(b"hunter2-but-longer"));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

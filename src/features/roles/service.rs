use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::roles::dto::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::model::Role;
use crate::shared::repo::{LifecycleRepo, Resource};
use crate::shared::types::ListQuery;

/// Service for role operations
pub struct RoleService {
    repo: LifecycleRepo<Role>,
}

impl RoleService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LifecycleRepo::new(pool),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<RoleResponseDto>)> {
        let (total, roles) = self.repo.list(query).await?;
        Ok((total, roles.into_iter().map(|r| r.into()).collect()))
    }

    pub async fn get(&self, id: Uuid) -> Result<RoleResponseDto> {
        Ok(self.repo.get(id).await?.into())
    }

    /// Create a new role. The code is derived from the name and unique among
    /// active rows.
    pub async fn create(&self, dto: CreateRoleDto) -> Result<RoleResponseDto> {
        let code = slug::slugify(&dto.name);

        let sql = format!(
            "INSERT INTO roles (public_id, name, code, status) \
             VALUES ($1, $2, $3, TRUE) \
             RETURNING {}",
            Role::COLUMNS
        );
        let role = sqlx::query_as::<_, Role>(&sql)
            .bind(Uuid::new_v4())
            .bind(&dto.name)
            .bind(&code)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Role already exists"))?;

        tracing::info!("Role created: id={}, code={}", role.public_id, code);

        Ok(role.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateRoleDto) -> Result<RoleResponseDto> {
        let code = dto.name.as_deref().map(slug::slugify);

        let sql = format!(
            "UPDATE roles SET \
             name = COALESCE($2, name), \
             code = COALESCE($3, code), \
             status = COALESCE($4, status), \
             updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE \
             RETURNING {}",
            Role::COLUMNS
        );
        let role = sqlx::query_as::<_, Role>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&code)
            .bind(dto.status)
            .fetch_optional(self.repo.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Role already exists"))?;

        role.map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Role '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let role = self.repo.soft_delete(id).await?;
        tracing::info!("Role soft deleted: id={}", role.public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn role_code_is_slugified_name() {
        assert_eq!(slug::slugify("Content Editor"), "content-editor");
        assert_eq!(slug::slugify("Admin"), "admin");
    }
}

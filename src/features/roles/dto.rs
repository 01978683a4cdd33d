use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::roles::model::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponseDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleResponseDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.public_id,
            name: r.name,
            code: r.code,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

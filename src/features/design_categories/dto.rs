use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::design_categories::model::DesignCategory;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDesignCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 2, max = 8, message = "Language must be 2-8 characters"))]
    pub language: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDesignCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 8, message = "Language must be 2-8 characters"))]
    pub language: Option<String>,
    pub position: Option<i32>,
    pub is_published: Option<bool>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignCategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub language: String,
    pub position: Option<i32>,
    pub is_published: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<DesignCategory> for DesignCategoryResponseDto {
    fn from(c: DesignCategory) -> Self {
        Self {
            id: c.public_id,
            name: c.name,
            slug: c.slug,
            language: c.language,
            position: c.position,
            is_published: c.is_published,
            status: c.status,
            created_at: c.created_at,
            published_at: c.published_at,
        }
    }
}

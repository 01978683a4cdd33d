use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::tutorials::model::Tutorial;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorialDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub design_category_id: Option<Uuid>,
    pub description: Option<String>,
    pub embed: Option<String>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorialDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub design_category_id: Option<Uuid>,
    pub description: Option<String>,
    pub embed: Option<String>,
    pub duration: Option<i32>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorialResponseDto {
    pub id: Uuid,
    pub design_category_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub embed: Option<String>,
    pub duration: Option<i32>,
    pub is_published: bool,
    pub is_featured: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Tutorial> for TutorialResponseDto {
    fn from(t: Tutorial) -> Self {
        Self {
            id: t.public_id,
            design_category_id: t.design_category_id,
            name: t.name,
            slug: t.slug,
            description: t.description,
            embed: t.embed,
            duration: t.duration,
            is_published: t.is_published,
            is_featured: t.is_featured,
            status: t.status,
            created_at: t.created_at,
            published_at: t.published_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::articles::model::Article;

/// Request DTO for creating an article
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub design_category_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub content: Option<String>,
    pub cover_img: Option<String>,
    pub word_count: Option<i32>,
    pub read_time: Option<i32>,
}

/// Request DTO for updating an article. Absent fields keep their value;
/// changing `name` recomputes the slug.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub design_category_id: Option<Uuid>,
    pub content: Option<String>,
    pub cover_img: Option<String>,
    pub word_count: Option<i32>,
    pub read_time: Option<i32>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<bool>,
}

/// Response DTO for article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponseDto {
    pub id: Uuid,
    pub design_category_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub content: Option<String>,
    pub cover_img: Option<String>,
    pub word_count: Option<i32>,
    pub read_time: Option<i32>,
    pub is_published: bool,
    pub is_featured: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleResponseDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.public_id,
            design_category_id: a.design_category_id,
            user_id: a.user_id,
            name: a.name,
            slug: a.slug,
            content: a.content,
            cover_img: a.cover_img,
            word_count: a.word_count,
            read_time: a.read_time,
            is_published: a.is_published,
            is_featured: a.is_featured,
            status: a.status,
            created_at: a.created_at,
            published_at: a.published_at,
        }
    }
}

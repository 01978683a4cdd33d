use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::podcasts::model::Podcast;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePodcastDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub person: Option<String>,
    pub person_career: Option<String>,
    pub embed: Option<String>,
    pub spotify_embed: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePodcastDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub person: Option<String>,
    pub person_career: Option<String>,
    pub embed: Option<String>,
    pub spotify_embed: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodcastResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub person: Option<String>,
    pub person_career: Option<String>,
    pub embed: Option<String>,
    pub spotify_embed: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Podcast> for PodcastResponseDto {
    fn from(p: Podcast) -> Self {
        Self {
            id: p.public_id,
            name: p.name,
            slug: p.slug,
            description: p.description,
            person: p.person,
            person_career: p.person_career,
            embed: p.embed,
            spotify_embed: p.spotify_embed,
            duration: p.duration,
            language: p.language,
            is_published: p.is_published,
            is_featured: p.is_featured,
            status: p.status,
            created_at: p.created_at,
            published_at: p.published_at,
        }
    }
}

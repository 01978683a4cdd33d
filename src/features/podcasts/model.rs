use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Featurable, Publishable, Resource};

/// Database model for podcast
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Podcast {
    pub id: i64,
    pub public_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Podcast {
    const TABLE: &'static str = "podcasts";
    const LABEL: &'static str = "Podcast";
    const COLUMNS: &'static str = "id, public_id, name, slug, description, person, \
        person_career, embed, spotify_embed, duration, language, is_published, is_featured, \
        status, created_at, published_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "slug", "person"];
}

impl Publishable for Podcast {}
impl Featurable for Podcast {}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Publishable, Resource};

/// Database model for design category
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct DesignCategory {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub slug: String,
    pub language: String,
    pub position: Option<i32>,
    pub is_published: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for DesignCategory {
    const TABLE: &'static str = "design_categories";
    const LABEL: &'static str = "Design category";
    const COLUMNS: &'static str = "id, public_id, name, slug, language, position, is_published, \
        status, created_at, published_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "slug"];
}

impl Publishable for DesignCategory {}

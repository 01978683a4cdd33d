use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Featurable, Publishable, Resource};

/// Database model for tutorial
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Tutorial {
    pub id: i64,
    pub public_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Tutorial {
    const TABLE: &'static str = "tutorials";
    const LABEL: &'static str = "Tutorial";
    const COLUMNS: &'static str = "id, public_id, design_category_id, name, slug, description, \
        embed, duration, is_published, is_featured, status, created_at, published_at, \
        updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "slug"];
}

impl Publishable for Tutorial {}
impl Featurable for Tutorial {}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Featurable, Publishable, Resource};

/// Database model for article
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Article {
    pub id: i64,
    pub public_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Article {
    const TABLE: &'static str = "articles";
    const LABEL: &'static str = "Article";
    const COLUMNS: &'static str = "id, public_id, design_category_id, user_id, name, slug, \
        content, cover_img, word_count, read_time, is_published, is_featured, status, \
        created_at, published_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "slug"];
}

impl Publishable for Article {}
impl Featurable for Article {}

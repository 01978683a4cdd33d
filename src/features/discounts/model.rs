use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Featurable, Publishable, Resource};

/// Database model for discount
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Discount {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub position: Option<i32>,
    pub code: Option<String>,
    pub card_text: Option<String>,
    pub banner_text: Option<String>,
    pub url: Option<String>,
    pub published_start_date: Option<DateTime<Utc>>,
    pub published_end_date: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub is_featured: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Discount {
    const TABLE: &'static str = "discounts";
    const LABEL: &'static str = "Discount";
    const COLUMNS: &'static str = "id, public_id, name, position, code, card_text, banner_text, \
        url, published_start_date, published_end_date, is_published, is_featured, status, \
        created_at, published_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "code"];
}

impl Publishable for Discount {}
impl Featurable for Discount {}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::{Featurable, Publishable, Resource};

/// Database model for career posting
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Career {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub slug: String,
    pub work_type: Option<String>,
    pub profession_id: Option<Uuid>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub company_website: Option<String>,
    pub location: Option<String>,
    pub email_apply: bool,
    pub apply_email: Option<String>,
    pub apply_link: Option<String>,
    pub color: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Career {
    const TABLE: &'static str = "careers";
    const LABEL: &'static str = "Career";
    const COLUMNS: &'static str = "id, public_id, name, slug, work_type, profession_id, \
        description, company, company_website, location, email_apply, apply_email, apply_link, \
        color, is_published, is_featured, status, created_at, published_at, updated_at, \
        deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "slug", "company"];
}

impl Publishable for Career {}
impl Featurable for Career {}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::Resource;

/// Database model for newsletter subscription
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Newsletter {
    pub id: i64,
    pub public_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub interests: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Newsletter {
    const TABLE: &'static str = "newsletters";
    const LABEL: &'static str = "Newsletter subscription";
    const COLUMNS: &'static str = "id, public_id, first_name, last_name, email, interests, \
        status, created_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["email", "first_name", "last_name"];
}

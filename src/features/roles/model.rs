use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::Resource;

/// Database model for role
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Role {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub code: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Role {
    const TABLE: &'static str = "roles";
    const LABEL: &'static str = "Role";
    const COLUMNS: &'static str =
        "id, public_id, name, code, status, created_at, updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "code"];
}

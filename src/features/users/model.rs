use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::repo::Resource;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct User {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub email_verification_code: String,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub hair_color: Option<String>,
    pub favorite_food: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const LABEL: &'static str = "User";
    const COLUMNS: &'static str = "id, public_id, name, email, is_email_verified, \
        email_verification_code, password, bio, hair_color, favorite_food, status, created_at, \
        updated_at, deleted_at";
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "email"];
}

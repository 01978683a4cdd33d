use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::careers::model::Career;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareerDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub work_type: Option<String>,
    pub profession_id: Option<Uuid>,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "Company must be at most 255 characters"))]
    pub company: Option<String>,
    #[validate(url(message = "Company website must be a valid URL"))]
    pub company_website: Option<String>,
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,
    pub email_apply: Option<bool>,
    #[validate(email(message = "Invalid apply email address"))]
    pub apply_email: Option<String>,
    pub apply_link: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCareerDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub work_type: Option<String>,
    pub profession_id: Option<Uuid>,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "Company must be at most 255 characters"))]
    pub company: Option<String>,
    #[validate(url(message = "Company website must be a valid URL"))]
    pub company_website: Option<String>,
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,
    pub email_apply: Option<bool>,
    #[validate(email(message = "Invalid apply email address"))]
    pub apply_email: Option<String>,
    pub apply_link: Option<String>,
    pub color: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareerResponseDto {
    pub id: Uuid,
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
}

impl From<Career> for CareerResponseDto {
    fn from(c: Career) -> Self {
        Self {
            id: c.public_id,
            name: c.name,
            slug: c.slug,
            work_type: c.work_type,
            profession_id: c.profession_id,
            description: c.description,
            company: c.company,
            company_website: c.company_website,
            location: c.location,
            email_apply: c.email_apply,
            apply_email: c.apply_email,
            apply_link: c.apply_link,
            color: c.color,
            is_published: c.is_published,
            is_featured: c.is_featured,
            status: c.status,
            created_at: c.created_at,
            published_at: c.published_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::newsletters::model::Newsletter;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsletterDto {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub interests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsletterDto {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub interests: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResponseDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub interests: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Newsletter> for NewsletterResponseDto {
    fn from(n: Newsletter) -> Self {
        Self {
            id: n.public_id,
            first_name: n.first_name,
            last_name: n.last_name,
            email: n.email,
            interests: n.interests,
            status: n.status,
            created_at: n.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_email_fails_validation() {
        let dto = CreateNewsletterDto {
            first_name: None,
            last_name: None,
            email: "not-an-email".to_string(),
            interests: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn valid_email_passes_validation() {
        let dto = CreateNewsletterDto {
            first_name: Some("Ada".to_string()),
            last_name: None,
            email: "ada@example.com".to_string(),
            interests: Some("design".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::discounts::model::Discount;
use crate::shared::validation::CODE_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiscountDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub position: Option<i32>,
    #[validate(regex(
        path = *CODE_REGEX,
        message = "Code must be lowercase alphanumeric with hyphens"
    ))]
    pub code: Option<String>,
    pub card_text: Option<String>,
    pub banner_text: Option<String>,
    pub url: Option<String>,
    pub published_start_date: Option<DateTime<Utc>>,
    pub published_end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscountDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub position: Option<i32>,
    #[validate(regex(
        path = *CODE_REGEX,
        message = "Code must be lowercase alphanumeric with hyphens"
    ))]
    pub code: Option<String>,
    pub card_text: Option<String>,
    pub banner_text: Option<String>,
    pub url: Option<String>,
    pub published_start_date: Option<DateTime<Utc>>,
    pub published_end_date: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponseDto {
    pub id: Uuid,
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
}

impl From<Discount> for DiscountResponseDto {
    fn from(d: Discount) -> Self {
        Self {
            id: d.public_id,
            name: d.name,
            position: d.position,
            code: d.code,
            card_text: d.card_text,
            banner_text: d.banner_text,
            url: d.url,
            published_start_date: d.published_start_date,
            published_end_date: d.published_end_date,
            is_published: d.is_published,
            is_featured: d.is_featured,
            status: d.status,
            created_at: d.created_at,
            published_at: d.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_code_fails_validation() {
        let dto = CreateDiscountDto {
            name: "Spring sale".to_string(),
            position: None,
            code: Some("SPRING-2024".to_string()),
            card_text: None,
            banner_text: None,
            url: None,
            published_start_date: None,
            published_end_date: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn hyphenated_lowercase_code_passes_validation() {
        let dto = CreateDiscountDto {
            name: "Spring sale".to_string(),
            position: None,
            code: Some("spring-sale-2024".to_string()),
            card_text: None,
            banner_text: None,
            url: None,
            published_start_date: None,
            published_end_date: None,
        };
        assert!(dto.validate().is_ok());
    }
}

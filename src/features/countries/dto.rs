use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::countries::model::Country;
use crate::shared::validation::CODE_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(regex(
        path = *CODE_REGEX,
        message = "Code must be lowercase alphanumeric with hyphens"
    ))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(regex(
        path = *CODE_REGEX,
        message = "Code must be lowercase alphanumeric with hyphens"
    ))]
    pub code: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Country> for CountryResponseDto {
    fn from(c: Country) -> Self {
        Self {
            id: c.public_id,
            name: c.name,
            code: c.code,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

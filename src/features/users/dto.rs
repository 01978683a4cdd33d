use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 255, message = "Password must be 8-255 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: Option<String>,
    pub bio: Option<String>,
    pub hair_color: Option<String>,
    pub favorite_food: Option<String>,
    pub status: Option<bool>,
}

/// User fields safe to expose. Password and the verification code never
/// leave the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub bio: Option<String>,
    pub hair_color: Option<String>,
    pub favorite_food: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseDto {
    pub token: String,
    pub user: UserResponseDto,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.public_id,
            name: u.name,
            email: u.email,
            is_email_verified: u.is_email_verified,
            bio: u.bio,
            hair_color: u.hair_color,
            favorite_food: u.favorite_food,
            status: u.status,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn serialized_user_never_exposes_password() {
        let user = User {
            id: 1,
            public_id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_email_verified: false,
            email_verification_code: "123456".to_string(),
            password: Some("c0ffee".to_string()),
            bio: None,
            hair_color: None,
            favorite_food: None,
            status: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let dto: UserResponseDto = user.into();
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("c0ffee"));
        assert!(!json.contains("123456"));
    }

    #[test]
    fn short_password_fails_validation() {
        let dto = RegisterUserDto {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}

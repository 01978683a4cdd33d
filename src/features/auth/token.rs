use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    email: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates HS256 bearer tokens for protected routes.
pub struct TokenService {
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now,
            exp: now + self.config.token_ttl.as_secs() as i64,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedUser {
            user_id: data.claims.sub,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(secret: &str) -> TokenService {
        TokenService::new(AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl: Duration::from_secs(3600),
        })
    }

    #[test]
    fn issued_token_round_trips() {
        let tokens = service("test-secret");
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id, "editor@example.com").unwrap();
        let user = tokens.verify(&token).unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "editor@example.com");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = service("secret-a")
            .issue(Uuid::new_v4(), "editor@example.com")
            .unwrap();

        let result = service("secret-b").verify(&token);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(service("test-secret").verify("not-a-jwt").is_err());
    }
}

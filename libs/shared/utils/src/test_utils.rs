use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{DocumentStore, HospitalState};
use shared_models::auth::User;

pub struct TestConfig {
    pub jwt_secret: String,
    pub upload_dir: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            upload_dir: "uploads".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            hospital_db_uri: String::new(),
            ecommerce_db_uri: String::new(),
            mongo_uri: String::new(),
            jwt_secret: self.jwt_secret.clone(),
            upload_dir: self.upload_dir.clone(),
            port: None,
        }
    }

    /// Hospital state with a disconnected store; good enough for everything
    /// that never reaches the database (middleware, auth failures).
    pub async fn to_hospital_state(&self) -> Arc<HospitalState> {
        let store = DocumentStore::connect("", "midcity", "hospital").await;
        Arc::new(HospitalState {
            config: self.to_app_config(),
            store,
        })
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role: "patient".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: "Test User".to_string(),
            role: role.to_string(),
        }
    }

    pub fn doctor(email: &str) -> Self {
        Self::new(email, "doctor")
    }

    pub fn viewer(email: &str) -> Self {
        Self::new(email, "viewer")
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, "patient")
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: Some(self.email.clone()),
            name: Some(self.name.clone()),
            role: Some(self.role.clone()),
            created_at: Some(Utc::now()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    /// Forge a token with an arbitrary expiry, bypassing the production TTL.
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let b64 = |bytes: &[u8]| general_purpose::URL_SAFE_NO_PAD.encode(bytes);
        let header = b64(json!({"alg": "HS256", "typ": "JWT"}).to_string().as_bytes());
        let claims = b64(
            json!({
                "sub": user.id,
                "email": user.email,
                "name": user.name,
                "role": user.role,
                "iat": now.timestamp(),
                "exp": exp.timestamp(),
            })
            .to_string()
            .as_bytes(),
        );

        let signing_input = format!("{}.{}", header, claims);
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(signing_input.as_bytes());
        let signature = b64(&mac.finalize().into_bytes());

        format!("{}.{}", signing_input, signature)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::validate_token;

    #[test]
    fn test_user_roles() {
        let user = TestUser::viewer("viewer@example.com");
        assert_eq!(user.role, "viewer");

        let model = user.to_user();
        assert_eq!(model.role, Some("viewer".to_string()));
        assert_eq!(model.email, Some(user.email.clone()));
    }

    #[test]
    fn test_token_is_accepted_by_validator() {
        let config = TestConfig::default();
        let user = TestUser::doctor("doc@example.com");
        let token = JwtTestUtils::create_test_token(&user, &config.jwt_secret, Some(1));

        let resolved = validate_token(&token, &config.jwt_secret).unwrap();
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.role, Some("doctor".to_string()));
    }
}

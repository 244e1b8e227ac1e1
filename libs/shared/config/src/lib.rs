use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hospital database connection string (viewer connection A).
    pub hospital_db_uri: String,
    /// Ecommerce database connection string (viewer connection B).
    pub ecommerce_db_uri: String,
    /// Primary connection string for the hospital management API.
    pub mongo_uri: String,
    pub jwt_secret: String,
    pub upload_dir: String,
    /// Listening port; each binary falls back to its own default when unset.
    pub port: Option<u16>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            hospital_db_uri: env::var("HOSPITAL_DB")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_DB not set, using empty value");
                    String::new()
                }),
            ecommerce_db_uri: env::var("ECOMMERCE_DB")
                .unwrap_or_else(|_| {
                    warn!("ECOMMERCE_DB not set, using empty value");
                    String::new()
                }),
            mongo_uri: env::var("MONGO_URI")
                .unwrap_or_else(|_| {
                    warn!("MONGO_URI not set, using empty value");
                    String::new()
                }),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("JWT_SECRET not set, using built-in default");
                    "midcity_session_secret".to_string()
                }),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string()),
            port: env::var("PORT").ok().and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!("PORT is not a valid port number, ignoring");
                    None
                }
            }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.mongo_uri.is_empty() && !self.jwt_secret.is_empty()
    }

    pub fn is_viewer_configured(&self) -> bool {
        !self.hospital_db_uri.is_empty() && !self.ecommerce_db_uri.is_empty()
    }
}

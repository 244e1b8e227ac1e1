use shared_config::AppConfig;

use crate::store::DocumentStore;

/// Shared state for the hospital management API: configuration plus the one
/// injected database handle. Opened on startup, passed into every router.
#[derive(Clone)]
pub struct HospitalState {
    pub config: AppConfig,
    pub store: DocumentStore,
}

impl HospitalState {
    pub async fn init(config: AppConfig) -> Self {
        let store = DocumentStore::connect(&config.mongo_uri, "midcity", "hospital").await;
        Self { config, store }
    }
}

/// Shared state for the database viewer: two independent connections with
/// their own lifecycles, never cross-queried.
#[derive(Clone)]
pub struct ViewerState {
    pub config: AppConfig,
    pub hospital: DocumentStore,
    pub ecommerce: DocumentStore,
}

impl ViewerState {
    pub async fn init(config: AppConfig) -> Self {
        let hospital = DocumentStore::connect(&config.hospital_db_uri, "hospital", "hospital").await;
        let ecommerce =
            DocumentStore::connect(&config.ecommerce_db_uri, "ecommerce", "ecommerce").await;
        Self {
            config,
            hospital,
            ecommerce,
        }
    }
}

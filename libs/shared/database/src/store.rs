use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, error, info};

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// One named connection to a document database.
///
/// Connecting is lazy: construction never aborts the process. A store built
/// from a bad or missing URI stays in the disconnected state and every
/// operation on it fails per-request until configuration is fixed.
#[derive(Clone)]
pub struct DocumentStore {
    db: Option<Database>,
    label: String,
}

impl DocumentStore {
    /// Open a connection handle. `db_name` is only used when the URI does not
    /// name a default database itself.
    pub async fn connect(uri: &str, db_name: &str, label: &str) -> Self {
        if uri.is_empty() {
            error!("{} database URI is empty, store starts disconnected", label);
            return Self {
                db: None,
                label: label.to_string(),
            };
        }

        match Self::build_client(uri).await {
            Ok(client) => {
                let db = client
                    .default_database()
                    .unwrap_or_else(|| client.database(db_name));
                info!("{} database handle opened ({})", label, db.name());
                Self {
                    db: Some(db),
                    label: label.to_string(),
                }
            }
            Err(err) => {
                error!("{} database error: {}", label, err);
                Self {
                    db: None,
                    label: label.to_string(),
                }
            }
        }
    }

    async fn build_client(uri: &str) -> Result<Client> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        Ok(Client::with_options(options)?)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Round-trips a `{ping: 1}` command. Used by the health endpoint; a
    /// store that never connected reports false immediately.
    pub async fn ping(&self) -> bool {
        match &self.db {
            Some(db) => match db.run_command(doc! { "ping": 1 }).await {
                Ok(_) => true,
                Err(err) => {
                    debug!("{} database ping failed: {}", self.label, err);
                    false
                }
            },
            None => false,
        }
    }

    /// Fetch documents in store-native order. `limit == 0` means unbounded;
    /// callers must not rely on ordering being stable.
    pub async fn find(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>> {
        let db = self.database()?;
        let coll = db.collection::<Document>(collection);
        let mut query = coll.find(filter);
        if limit > 0 {
            query = query.limit(limit);
        }
        let cursor = query.await.map_err(|err| self.log_and_wrap(err))?;
        let documents = cursor
            .try_collect()
            .await
            .map_err(|err| self.log_and_wrap(err))?;
        Ok(documents)
    }

    pub async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let db = self.database()?;
        db.collection::<Document>(collection)
            .find_one(filter)
            .await
            .map_err(|err| self.log_and_wrap(err))
    }

    /// Insert one document and return it with the assigned `_id`.
    pub async fn insert(&self, collection: &str, mut document: Document) -> Result<Document> {
        let db = self.database()?;
        let result = db
            .collection::<Document>(collection)
            .insert_one(&document)
            .await
            .map_err(|err| self.log_and_wrap(err))?;
        if let Bson::ObjectId(id) = result.inserted_id {
            document.insert("_id", id);
        }
        Ok(document)
    }

    fn database(&self) -> Result<&Database> {
        self.db
            .as_ref()
            .ok_or_else(|| anyhow!("{} database is not connected", self.label))
    }

    fn log_and_wrap(&self, err: mongodb::error::Error) -> anyhow::Error {
        error!("{} database error: {}", self.label, err);
        anyhow!("{} database operation failed", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_uri_yields_disconnected_store() {
        let store = DocumentStore::connect("", "midcity", "hospital").await;

        assert!(!store.ping().await);
        let err = store.find("doctors", doc! {}, 100).await.unwrap_err();
        assert!(err.to_string().contains("not connected"));
    }

    #[tokio::test]
    async fn malformed_uri_does_not_abort() {
        let store = DocumentStore::connect("not-a-uri", "midcity", "hospital").await;

        assert!(!store.ping().await);
        assert!(store.insert("contacts", doc! { "name": "A" }).await.is_err());
    }

    // Parseable URI but nothing listening: the handle opens, every query
    // fails per-request after the selection timeout, capped and uncapped
    // alike.
    #[tokio::test]
    async fn unreachable_server_fails_per_request() {
        let store =
            DocumentStore::connect("mongodb://127.0.0.1:9/midcity", "midcity", "hospital").await;

        assert!(store.find("doctors", doc! {}, 100).await.is_err());
        assert!(store.find("doctors", doc! {}, 0).await.is_err());
    }
}

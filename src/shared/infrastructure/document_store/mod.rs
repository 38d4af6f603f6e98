// Connection to the external document database.
//
// Opened once during startup and shared by every request. There is no reconnection or retry
// here: if the first ping does not succeed within the configured bound, startup fails.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub connect_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("invalid connection uri: {0}")]
    InvalidUri(#[source] mongodb::error::Error),

    #[error("document store unreachable: {0}")]
    Unreachable(#[source] mongodb::error::Error),

    #[error("document store did not answer within {0:?}")]
    Timeout(Duration),
}

#[derive(Clone, Debug)]
pub struct DocumentStore {
    client: Client,
    database: Database,
}

impl DocumentStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self, ConnectError> {
        let mut options = ClientOptions::parse(config.uri.as_str())
            .await
            .map_err(ConnectError::InvalidUri)?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options).map_err(ConnectError::InvalidUri)?;
        let database = client.database(&config.database);

        // The driver connects lazily; a ping forces the first round trip.
        tokio::time::timeout(config.connect_timeout, database.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| ConnectError::Timeout(config.connect_timeout))?
            .map_err(ConnectError::Unreachable)?;

        tracing::info!(database = %config.database, "connected to document store");
        Ok(Self { client, database })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use employees::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use employees::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use employees::modules::employees::adapters::outbound::employee_store_mongo::MongoEmployeeStore;
use employees::shared::infrastructure::document_store::DocumentStore;
use employees::shell::config::{AppConfig, StoreKind};
use employees::shell::http::router;
use employees::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Without storage the service is useless, so a failed connect ends the process here.
    let (store, document_store): (Arc<dyn EmployeeStore>, Option<DocumentStore>) =
        match config.store_kind {
            StoreKind::Mongo => {
                let document_store = DocumentStore::connect(&config.store)
                    .await
                    .context("failed to connect to the document store")?;
                let store: Arc<dyn EmployeeStore> =
                    Arc::new(MongoEmployeeStore::new(&document_store));
                (store, Some(document_store))
            }
            StoreKind::Memory => {
                tracing::warn!("using in memory employee store, records are lost on exit");
                let store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());
                (store, None)
            }
        };

    let app = router(AppState { store });

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, store = ?config.store_kind, "employees API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(document_store) = document_store {
        document_store.client().clone().shutdown().await;
    }
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

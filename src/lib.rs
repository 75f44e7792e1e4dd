//! Todo Server Library
//!
//! HTTP/JSON CRUD service over a single SQLite-backed todo table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{AppState, ServerConfig};
use store::TodoStore;

pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already set, ignore
    }

    let config = ServerConfig::from_env();
    info!("Database: {}", config.database_url);

    // Pool lives for the whole process and is handed to the store here;
    // nothing else touches the database.
    let pool = config.connect_pool().await?;
    let store = Arc::new(TodoStore::new(pool));
    store.init_schema().await?;
    info!("Todo store initialized");

    let app = router::router(AppState { store });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server is listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

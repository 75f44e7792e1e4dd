//! Server configuration and shared state.

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::store::TodoStore;

/// Configuration for the todo server, read from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Store connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen port (`PORT`).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:todo.sqlite".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Open the connection pool, creating the database file if missing.
    pub async fn connect_pool(&self) -> anyhow::Result<SqlitePool> {
        let options: SqliteConnectOptions = self.database_url.parse()?;
        let pool = SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await?;
        Ok(pool)
    }
}

/// App state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

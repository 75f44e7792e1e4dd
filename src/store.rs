//! Data access layer for the `todo` table.
//!
//! All SQL lives here. Every operation either succeeds or fails with
//! `sqlx::Error`; "no row matched" is reported as `None`, never as an
//! error, so callers can map the two outcomes to different statuses.

use sqlx::SqlitePool;

use crate::models::{Item, ItemDraft, ItemPatch};

/// Owns all interaction with the persisted todo collection.
///
/// Holds the shared connection pool handed in at startup; no caller
/// keeps a connection across operations.
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `todo` table if it does not exist yet.
    pub async fn init_schema(&self) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todo (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new item. The store assigns the id and defaults
    /// `completed` to false.
    pub async fn create(&self, draft: &ItemDraft) -> sqlx::Result<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO todo (title) VALUES (?) RETURNING id, title, completed",
        )
        .bind(&draft.title)
        .fetch_one(&self.pool)
        .await
    }

    /// Every persisted item, incomplete ones first. Relative order
    /// among items with equal `completed` is store-defined.
    pub async fn list_all(&self) -> sqlx::Result<Vec<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT id, title, completed FROM todo ORDER BY completed ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Look up one item by primary key.
    pub async fn get_by_id(&self, id: i64) -> sqlx::Result<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT id, title, completed FROM todo WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Apply a sparse patch: fields absent from the patch keep their
    /// stored values. Returns the post-update row, or `None` when no
    /// row matched (in which case nothing is modified).
    pub async fn update_by_id(&self, id: i64, patch: &ItemPatch) -> sqlx::Result<Option<Item>> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE todo
            SET title = COALESCE(?, title),
                completed = COALESCE(?, completed)
            WHERE id = ?
            RETURNING id, title, completed
            "#,
        )
        .bind(&patch.title)
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Remove one item and return its last state before removal, or
    /// `None` when no row matched.
    pub async fn delete_by_id(&self, id: i64) -> sqlx::Result<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "DELETE FROM todo WHERE id = ? RETURNING id, title, completed",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

//! Wire and storage shapes for todo items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted todo item. `id` is assigned by the store at insertion
/// time and never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Creation input. `completed` is not accepted here; the store
/// defaults it to false.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDraft {
    pub title: String,
}

/// Update input. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::tempdir;
use todo_server::models::{ItemDraft, ItemPatch};
use todo_server::store::TodoStore;

async fn open_store(dir: &Path) -> TodoStore {
    let options = SqliteConnectOptions::new()
        .filename(dir.join("todo.sqlite"))
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .unwrap();

    let store = TodoStore::new(pool);
    store.init_schema().await.unwrap();
    store
}

fn draft(title: &str) -> ItemDraft {
    ItemDraft {
        title: title.to_string(),
    }
}

#[tokio::test]
async fn create_assigns_unique_ids_and_defaults_completed() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    let mut seen = Vec::new();
    for title in ["buy milk", "walk dog", "write tests"] {
        let item = store.create(&draft(title)).await.unwrap();
        assert_eq!(item.title, title);
        assert!(!item.completed);
        assert!(!seen.contains(&item.id), "id {} reused", item.id);
        seen.push(item.id);
    }
}

#[tokio::test]
async fn lookups_and_mutations_miss_on_unknown_id() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    assert!(store.get_by_id(999_999).await.unwrap().is_none());
    assert!(store
        .update_by_id(999_999, &ItemPatch::default())
        .await
        .unwrap()
        .is_none());
    assert!(store.delete_by_id(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn created_item_round_trips_through_get() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    let created = store.create(&draft("buy milk")).await.unwrap();
    let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_returns_last_state_and_is_not_repeatable() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    let created = store.create(&draft("ephemeral")).await.unwrap();

    let deleted = store.delete_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(deleted, created);

    // Second delete of the same id finds nothing.
    assert!(store.delete_by_id(created.id).await.unwrap().is_none());
    assert!(store.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn list_orders_incomplete_before_completed() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    assert!(store.list_all().await.unwrap().is_empty());

    let mut completed_ids = Vec::new();
    for i in 0..6 {
        let item = store.create(&draft(&format!("task {i}"))).await.unwrap();
        if i % 2 == 0 {
            store
                .update_by_id(
                    item.id,
                    &ItemPatch {
                        title: None,
                        completed: Some(true),
                    },
                )
                .await
                .unwrap();
            completed_ids.push(item.id);
        }
    }

    let items = store.list_all().await.unwrap();
    assert_eq!(items.len(), 6);

    // No completed item may precede an incomplete one.
    let first_completed = items.iter().position(|i| i.completed).unwrap();
    assert!(items[first_completed..].iter().all(|i| i.completed));
    assert!(items[..first_completed].iter().all(|i| !i.completed));
}

#[tokio::test]
async fn patch_keeps_fields_absent_from_the_patch() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path()).await;

    let created = store.create(&draft("buy milk")).await.unwrap();

    // Patch only `completed`; title must survive.
    let updated = store
        .update_by_id(
            created.id,
            &ItemPatch {
                title: None,
                completed: Some(true),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "buy milk");
    assert!(updated.completed);

    // Patch only `title`; completed must survive.
    let updated = store
        .update_by_id(
            created.id,
            &ItemPatch {
                title: Some("buy oat milk".to_string()),
                completed: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "buy oat milk");
    assert!(updated.completed);

    // Empty patch is a no-op that still reports the current row.
    let updated = store
        .update_by_id(created.id, &ItemPatch::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "buy oat milk");
    assert!(updated.completed);
}

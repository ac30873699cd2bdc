use super::Store;
use kku_core::config::StorageConfig;
use kku_core::traits::LocalStorage;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Create an in-memory store for testing.
async fn test_store() -> Store {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap();
    Store::run_migrations(&pool).await.unwrap();
    Store { pool }
}

#[tokio::test]
async fn test_get_missing_is_none() {
    let store = test_store().await;
    assert_eq!(store.get_item("c1", "kku-checklist").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get() {
    let store = test_store().await;
    store.set_item("c1", "preferred-language", "en").await.unwrap();
    assert_eq!(
        store.get_item("c1", "preferred-language").await.unwrap().as_deref(),
        Some("en")
    );
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = test_store().await;
    store.set_item("c1", "preferred-language", "en").await.unwrap();
    store.set_item("c1", "preferred-language", "vi").await.unwrap();
    assert_eq!(
        store.get_item("c1", "preferred-language").await.unwrap().as_deref(),
        Some("vi")
    );
    assert_eq!(store.client_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clients_are_isolated() {
    let store = test_store().await;
    store.set_item("c1", "kku-checklist", "a").await.unwrap();
    store.set_item("c2", "kku-checklist", "b").await.unwrap();
    assert_eq!(store.get_item("c1", "kku-checklist").await.unwrap().as_deref(), Some("a"));
    assert_eq!(store.get_item("c2", "kku-checklist").await.unwrap().as_deref(), Some("b"));
    assert_eq!(store.client_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_remove_item() {
    let store = test_store().await;
    store.set_item("c1", "kku-progress-tasks", "{}").await.unwrap();
    assert!(store.remove_item("c1", "kku-progress-tasks").await.unwrap());
    assert!(!store.remove_item("c1", "kku-progress-tasks").await.unwrap());
    assert_eq!(store.get_item("c1", "kku-progress-tasks").await.unwrap(), None);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let store = test_store().await;
    Store::run_migrations(&store.pool).await.unwrap();
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _migrations")
        .fetch_one(&store.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_new_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested/data/local.db");
    let config = StorageConfig {
        backend: "sqlite".to_string(),
        db_path: db_path.to_string_lossy().into_owned(),
    };
    let store = Store::new(&config).await.unwrap();
    store.set_item("c1", "k", "v").await.unwrap();
    assert!(db_path.exists());
    assert!(store.db_size().await.unwrap() > 0);

    // Reopen: data survives, migrations are skipped.
    drop(store);
    let reopened = Store::new(&config).await.unwrap();
    assert_eq!(reopened.get_item("c1", "k").await.unwrap().as_deref(), Some("v"));
}

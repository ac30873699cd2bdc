//! SQLite-backed local storage.

use async_trait::async_trait;
use kku_core::{config::StorageConfig, error::GatewayError, shellexpand, traits::LocalStorage};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Per-client key/value slots in a single SQLite table.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the database and run pending migrations.
    pub async fn new(config: &StorageConfig) -> Result<Self, GatewayError> {
        let db_path = shellexpand(&config.db_path);

        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GatewayError::Storage(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| GatewayError::Storage(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| GatewayError::Storage(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Local storage initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Database file size in bytes.
    pub async fn db_size(&self) -> Result<u64, GatewayError> {
        let (page_count,): (i64,) = sqlx::query_as("PRAGMA page_count")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::Storage(format!("pragma failed: {e}")))?;

        let (page_size,): (i64,) = sqlx::query_as("PRAGMA page_size")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::Storage(format!("pragma failed: {e}")))?;

        Ok((page_count * page_size) as u64)
    }

    /// Number of distinct clients holding any slot.
    pub async fn client_count(&self) -> Result<u64, GatewayError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT client) FROM local_storage")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::Storage(format!("query failed: {e}")))?;
        Ok(count as u64)
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), GatewayError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| GatewayError::Storage(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] =
            &[("001_init", include_str!("../../migrations/001_init.sql"))];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        GatewayError::Storage(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| GatewayError::Storage(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    GatewayError::Storage(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl LocalStorage for Store {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get_item(&self, client: &str, key: &str) -> Result<Option<String>, GatewayError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM local_storage WHERE client = ? AND key = ?")
                .bind(client)
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| GatewayError::Storage(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    async fn set_item(&self, client: &str, key: &str, value: &str) -> Result<(), GatewayError> {
        sqlx::query(
            "INSERT INTO local_storage (client, key, value) VALUES (?, ?, ?) \
             ON CONFLICT(client, key) DO UPDATE \
             SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(client)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Storage(format!("upsert failed: {e}")))?;

        Ok(())
    }

    async fn remove_item(&self, client: &str, key: &str) -> Result<bool, GatewayError> {
        let result = sqlx::query("DELETE FROM local_storage WHERE client = ? AND key = ?")
            .bind(client)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::Storage(format!("delete failed: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests;

use crate::database::query;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

/// Account link store: chat user id -> osu! username.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens or creates the database file.
    pub async fn new(db_path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
            }
        }

        let absolute_path = if db_path.is_absolute() {
            db_path.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(db_path)
        };

        let options = SqliteConnectOptions::new()
            .filename(&absolute_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        log::info!("DB: Opened {:?}", absolute_path);

        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Private in-memory database. A single connection keeps every query on
    /// the same memory store.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                discord_id INTEGER PRIMARY KEY,
                osu_username TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Links `discord_id` to `username`, replacing any previous link.
    pub async fn link(&self, discord_id: u64, username: &str) -> Result<(), sqlx::Error> {
        query::upsert_link(&self.pool, discord_id, username).await
    }

    /// Returns the osu! username linked to `discord_id`, if any.
    pub async fn lookup(&self, discord_id: u64) -> Result<Option<String>, sqlx::Error> {
        query::find_link(&self.pool, discord_id).await
    }

    pub async fn unlink(&self, discord_id: u64) -> Result<bool, sqlx::Error> {
        query::delete_link(&self.pool, discord_id).await
    }
}

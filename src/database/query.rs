//! Raw sqlx query helpers for the link store.

use sqlx::SqlitePool;

/// Discord snowflakes fit in 63 bits; SQLite integers are signed.
fn to_key(discord_id: u64) -> i64 {
    discord_id as i64
}

/// Inserts or replaces the link of a user.
pub async fn upsert_link(
    pool: &SqlitePool,
    discord_id: u64,
    username: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("REPLACE INTO users (discord_id, osu_username) VALUES (?1, ?2)")
        .bind(to_key(discord_id))
        .bind(username)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find_link(pool: &SqlitePool, discord_id: u64) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT osu_username FROM users WHERE discord_id = ?1")
        .bind(to_key(discord_id))
        .fetch_optional(pool)
        .await
}

/// Removes a link. Returns whether one existed.
pub async fn delete_link(pool: &SqlitePool, discord_id: u64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE discord_id = ?1")
        .bind(to_key(discord_id))
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

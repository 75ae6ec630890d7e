use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use sqlx_migrator::{Migrate, Plan};

/// Create a pool with WAL journaling, a busy timeout and foreign keys on.
///
/// The database file is created when missing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Apply every pending migration.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    corpsite_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("pragmas.sqlite3").to_str().unwrap());
        let pool = create_pool(&url, 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "wal");

        let foreign_keys: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(foreign_keys.0, 1);
    }

    #[tokio::test]
    async fn test_migrate_is_rerunnable() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("migrate.sqlite3").to_str().unwrap());
        let pool = create_pool(&url, 1).await.unwrap();

        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('contact_inquiries', 'services') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(
            tables,
            vec![("contact_inquiries".to_owned(),), ("services".to_owned(),)]
        );
    }
}

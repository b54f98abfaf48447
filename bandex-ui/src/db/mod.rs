//! Database access layer for bandex-ui
//!
//! All connections are read-only: the catalog is populated externally and
//! this service only issues filtered count and paginated fetch queries.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

/// Connect to the catalog database in read-only mode
///
/// Safety: Uses SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found: {}\nThe band catalog must be populated before starting bandex-ui.",
            db_path.display()
        );
    }

    // mode=ro: read-only mode
    // immutable=1: additional safety (SQLite won't write even for internal operations)
    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to database in read-only mode")?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: Database connection is not read-only!");
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn missing_database_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.db");

        let result = connect_readonly(&missing).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn readonly_connection_refuses_writes() {
        // Create a populated database file, then reopen it read-only
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("bands.db");

        let setup_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let setup = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&setup_url)
            .await
            .expect("Should create database file");
        sqlx::query("CREATE TABLE bands (guid TEXT PRIMARY KEY, name TEXT NOT NULL)")
            .execute(&setup)
            .await
            .expect("Should create table");
        setup.close().await;

        let pool = connect_readonly(&db_path)
            .await
            .expect("Should connect in read-only mode");

        let result = sqlx::query("INSERT INTO bands (guid, name) VALUES ('x', 'y')")
            .execute(&pool)
            .await;
        assert!(result.is_err(), "Write operation should fail in read-only mode");
    }
}

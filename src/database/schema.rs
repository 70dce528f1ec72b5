//! Database schema
//!
//! Idempotent schema initialization for the notes database. There is no
//! migration machinery; the DDL below is safe to execute on every start.
//! Column names and defaults are part of the on-disk contract with
//! database files created by earlier versions of the application.

use crate::error::Result;
use sqlx::sqlite::SqlitePool;

/// Ensure the notes table and the singleton settings row exist.
pub async fn initialize_database(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing database schema");

    // AUTOINCREMENT keeps note ids monotonic and never reused across deletes.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL DEFAULT '',
            date_added TEXT NOT NULL,
            date_last_edited TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // id is pinned to 1: the settings record is a singleton by schema,
    // not by query convention.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            font_size INTEGER NOT NULL DEFAULT 12,
            font_family TEXT NOT NULL DEFAULT 'Helvetica',
            language TEXT NOT NULL DEFAULT 'en',
            theme TEXT NOT NULL DEFAULT 'superhero',
            default_save_location TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Seed the defaults row; a no-op on every start after the first.
    sqlx::query("INSERT OR IGNORE INTO settings (id) VALUES (1)")
        .execute(pool)
        .await?;

    tracing::info!("Database initialization complete");
    Ok(())
}

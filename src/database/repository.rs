//! Repository layer for database operations
//!
//! CRUD for notes and the singleton settings record. Every operation is a
//! self-contained unit of work: one statement, implicitly committed, on a
//! connection released before the call returns. No operation spans another;
//! validation runs before every mutating statement.

use crate::config::TIMESTAMP_FORMAT;
use crate::error::{AppError, Result};
use crate::validation;
use chrono::{Local, NaiveDateTime, Timelike};
use sqlx::SqlitePool;
use std::path::Path;

use super::models::{CreateNoteRequest, Note, Settings, UpdateNoteRequest};

/// Current local time truncated to whole seconds, matching the stored
/// timestamp resolution so inserted and re-read records compare equal.
fn current_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new note with `date_added == date_last_edited == now`.
    pub async fn create_note(&self, req: CreateNoteRequest) -> Result<Note> {
        validation::validate_title(&req.title)?;

        let now = current_timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO notes (title, content, date_added, date_last_edited)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(format_timestamp(now))
        .bind(format_timestamp(now))
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Created note: {}", id);

        Ok(Note {
            id,
            title: req.title,
            content: req.content,
            date_added: now,
            date_last_edited: now,
        })
    }

    /// Get a note by ID
    pub async fn get_note(&self, id: i64) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, date_added, date_last_edited
            FROM notes WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NoteNotFound(id))?;

        Ok(note)
    }

    /// List all notes, most recently edited first
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, date_added, date_last_edited
            FROM notes
            ORDER BY date_last_edited DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Update a note's title and content, advancing `date_last_edited`.
    pub async fn update_note(&self, req: UpdateNoteRequest) -> Result<Note> {
        validation::validate_title(&req.title)?;

        let now = current_timestamp();

        let rows_affected = sqlx::query(
            r#"
            UPDATE notes
            SET title = ?, content = ?, date_last_edited = ?
            WHERE id = ?
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(format_timestamp(now))
        .bind(req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NoteNotFound(req.id));
        }

        tracing::debug!("Updated note: {}", req.id);

        self.get_note(req.id).await
    }

    /// Permanently delete a note
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let rows = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NoteNotFound(id));
        }

        tracing::debug!("Deleted note: {}", id);
        Ok(())
    }

    /// Read the whole settings record
    pub async fn get_settings(&self) -> Result<Settings> {
        let settings = sqlx::query_as::<_, Settings>(
            r#"
            SELECT font_size, font_family, language, theme, default_save_location
            FROM settings WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::SettingsMissing)?;

        Ok(settings)
    }

    pub async fn save_font_size(&self, font_size: u32) -> Result<()> {
        validation::validate_font_size(font_size)?;

        let rows = sqlx::query("UPDATE settings SET font_size = ? WHERE id = 1")
            .bind(font_size)
            .execute(&self.pool)
            .await?
            .rows_affected();

        self.settings_row_updated("font_size", rows)
    }

    pub async fn save_font_family(&self, font_family: &str) -> Result<()> {
        validation::validate_font_family(font_family)?;

        let rows = sqlx::query("UPDATE settings SET font_family = ? WHERE id = 1")
            .bind(font_family)
            .execute(&self.pool)
            .await?
            .rows_affected();

        self.settings_row_updated("font_family", rows)
    }

    pub async fn save_language(&self, language: &str) -> Result<()> {
        let rows = sqlx::query("UPDATE settings SET language = ? WHERE id = 1")
            .bind(language)
            .execute(&self.pool)
            .await?
            .rows_affected();

        self.settings_row_updated("language", rows)
    }

    pub async fn save_theme(&self, theme: &str) -> Result<()> {
        let rows = sqlx::query("UPDATE settings SET theme = ? WHERE id = 1")
            .bind(theme)
            .execute(&self.pool)
            .await?
            .rows_affected();

        self.settings_row_updated("theme", rows)
    }

    pub async fn save_default_save_location(&self, save_location: &Path) -> Result<()> {
        validation::validate_save_location(save_location)?;

        let rows = sqlx::query("UPDATE settings SET default_save_location = ? WHERE id = 1")
            .bind(save_location.to_string_lossy().into_owned())
            .execute(&self.pool)
            .await?
            .rows_affected();

        self.settings_row_updated("default_save_location", rows)
    }

    pub async fn get_font_size(&self) -> Result<u32> {
        sqlx::query_scalar::<_, u32>("SELECT font_size FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::SettingsMissing)
    }

    pub async fn get_font_family(&self) -> Result<String> {
        sqlx::query_scalar::<_, String>("SELECT font_family FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::SettingsMissing)
    }

    pub async fn get_language(&self) -> Result<String> {
        sqlx::query_scalar::<_, String>("SELECT language FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::SettingsMissing)
    }

    pub async fn get_theme(&self) -> Result<String> {
        sqlx::query_scalar::<_, String>("SELECT theme FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::SettingsMissing)
    }

    pub async fn get_default_save_location(&self) -> Result<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>(
            "SELECT default_save_location FROM settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::SettingsMissing)
    }

    /// Zero rows affected means the singleton settings row is gone, which a
    /// successful initialization rules out.
    fn settings_row_updated(&self, field: &str, rows_affected: u64) -> Result<()> {
        if rows_affected == 0 {
            return Err(AppError::SettingsMissing);
        }
        tracing::debug!("Saved setting: {}", field);
        Ok(())
    }
}

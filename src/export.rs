//! CSV export
//!
//! Serializes all notes to a comma-delimited UTF-8 file. Field quoting and
//! escaping are delegated to the csv crate so that titles and content
//! containing commas, quotes, or newlines survive a round trip.

use crate::config::{CSV_HEADER, TIMESTAMP_FORMAT};
use crate::database::Repository;
use crate::error::{AppError, Result};
use std::path::Path;

/// Service for exporting notes
#[derive(Clone)]
pub struct ExportService {
    repo: Repository,
}

impl ExportService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Export all notes to a CSV file at `destination`, most recently edited
    /// first. Returns the number of data rows written. Exporting an empty
    /// store is an error rather than an empty file.
    pub async fn export_notes_to_csv(&self, destination: &Path) -> Result<usize> {
        let notes = self.repo.list_notes().await?;

        if notes.is_empty() {
            return Err(AppError::Export("no notes to export".to_string()));
        }

        tracing::info!("Exporting {} notes to {:?}", notes.len(), destination);

        let mut writer = csv::Writer::from_path(destination)?;
        writer.write_record(CSV_HEADER)?;

        for note in &notes {
            writer.write_record([
                note.id.to_string(),
                note.title.clone(),
                note.content.clone(),
                note.date_added.format(TIMESTAMP_FORMAT).to_string(),
                note.date_last_edited.format(TIMESTAMP_FORMAT).to_string(),
            ])?;
        }

        writer.flush()?;

        tracing::info!("Export complete: {} rows", notes.len());

        Ok(notes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{initialize_database, CreateNoteRequest};
    use sqlx::sqlite::SqlitePoolOptions;
    use tempfile::TempDir;

    async fn create_test_service() -> ExportService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        ExportService::new(Repository::new(pool))
    }

    async fn add_note(service: &ExportService, title: &str, content: &str) {
        service
            .repo
            .create_note(CreateNoteRequest {
                title: title.to_string(),
                content: content.to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_export_empty_store_fails() {
        let service = create_test_service().await;
        let dir = TempDir::new().unwrap();

        let result = service
            .export_notes_to_csv(&dir.path().join("notes.csv"))
            .await;

        assert!(matches!(result, Err(AppError::Export(_))));
    }

    #[tokio::test]
    async fn test_export_unwritable_destination_fails() {
        let service = create_test_service().await;
        add_note(&service, "A note", "content").await;

        let result = service
            .export_notes_to_csv(Path::new("/no/such/dir/notes.csv"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_export_writes_header_and_rows() {
        let service = create_test_service().await;
        add_note(&service, "Groceries", "milk, eggs").await;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.csv");

        let count = service.export_notes_to_csv(&path).await.unwrap();
        assert_eq!(count, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Title,Content,Date Added,Date Last Edited"
        );
        // Content with a comma is quoted
        assert!(contents.contains("\"milk, eggs\""));
    }

    #[tokio::test]
    async fn test_export_round_trips_awkward_content() {
        let service = create_test_service().await;
        add_note(&service, "Quotes", r#"she said "hi""#).await;
        add_note(&service, "Newlines", "line one\nline two").await;
        add_note(&service, "Commas, in title", "a,b,c").await;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.csv");

        let count = service.export_notes_to_csv(&path).await.unwrap();
        assert_eq!(count, 3);

        let notes = service.repo.list_notes().await.unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();

        assert_eq!(rows.len(), notes.len());
        for (row, note) in rows.iter().zip(&notes) {
            assert_eq!(row.get(0).unwrap(), note.id.to_string());
            assert_eq!(row.get(1).unwrap(), note.title);
            assert_eq!(row.get(2).unwrap(), note.content);
            assert_eq!(
                row.get(3).unwrap(),
                note.date_added.format(TIMESTAMP_FORMAT).to_string()
            );
            assert_eq!(
                row.get(4).unwrap(),
                note.date_last_edited.format(TIMESTAMP_FORMAT).to_string()
            );
        }
    }
}

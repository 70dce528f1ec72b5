//! Database models
//!
//! Rust structs representing database entities.
//! All models use serde for serialization to the UI layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::config::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LANGUAGE, DEFAULT_THEME};

/// A user-authored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Assigned by the store on creation; monotonic, never reused
    pub id: i64,
    pub title: String,
    /// May be empty, never absent
    pub content: String,
    /// Set once at creation, immutable thereafter
    pub date_added: NaiveDateTime,
    /// Updated on every successful edit; never earlier than `date_added`
    pub date_last_edited: NaiveDateTime,
}

/// Create note request
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Update note request
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// The application settings record.
///
/// Exactly one logical record exists at all times; the store seeds it with
/// these defaults at initialization and it is never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Settings {
    pub font_size: u32,
    pub font_family: String,
    /// Locale code, opaque to this crate
    pub language: String,
    /// Visual theme identifier, opaque to this crate
    pub theme: String,
    /// Directory used as the default export destination, if configured
    pub default_save_location: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            default_save_location: None,
        }
    }
}

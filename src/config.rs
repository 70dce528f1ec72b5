//! Application configuration constants
//!
//! Central location for configuration constants, validation boundaries,
//! and the defaults seeded into a fresh settings row.

// ===== Database =====

/// Default file name for the notes database, relative to the working
/// directory of the embedding application.
pub const DEFAULT_DB_FILE: &str = "notes.db";

/// Timestamp format stored in the database and written to exports.
/// Local time, second resolution, no timezone offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ===== Font Settings Limits =====

/// Minimum accepted font size in points.
/// Smaller values render illegibly on standard displays.
pub const MIN_FONT_SIZE: u32 = 8;

/// Maximum accepted font size in points.
pub const MAX_FONT_SIZE: u32 = 72;

// ===== Settings Defaults =====

/// Font size seeded into a fresh settings row
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Font family seeded into a fresh settings row
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Locale code seeded into a fresh settings row
pub const DEFAULT_LANGUAGE: &str = "en";

/// Theme identifier seeded into a fresh settings row.
/// Opaque to this crate; the UI maps it to a visual theme.
pub const DEFAULT_THEME: &str = "superhero";

// ===== Export =====

/// Header row written at the top of every CSV export
pub const CSV_HEADER: [&str; 5] = ["ID", "Title", "Content", "Date Added", "Date Last Edited"];

//! Input validation
//!
//! Precondition checks applied before every mutating store operation.
//! A failure here aborts the write before any statement is executed and
//! surfaces as `AppError::Validation`, distinct from storage failures.

use crate::config::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{AppError, Result};
use std::path::Path;

/// A note title must contain at least one non-whitespace character.
/// Content carries no constraint beyond being text, which the type
/// system already guarantees; empty content is allowed.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AppError::Validation(
            "Title must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Font size must fall within the inclusive [8, 72] range.
pub fn validate_font_size(font_size: u32) -> Result<()> {
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&font_size) {
        return Err(AppError::Validation(format!(
            "Font size must be between {} and {}, got {}",
            MIN_FONT_SIZE, MAX_FONT_SIZE, font_size
        )));
    }
    Ok(())
}

/// Font family must contain at least one non-whitespace character.
pub fn validate_font_family(font_family: &str) -> Result<()> {
    if font_family.trim().is_empty() {
        return Err(AppError::Validation(
            "Font family must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// The default save location must name an existing directory.
pub fn validate_save_location(save_location: &Path) -> Result<()> {
    if !save_location.is_dir() {
        return Err(AppError::Validation(format!(
            "Save location must be a valid directory path: {}",
            save_location.display()
        )));
    }
    Ok(())
}

//! Catalog field constraints: categories, genres, and titles.
//!
//! The sentinel row IDs must match the seed data in
//! `db/migrations/20260712000002_create_catalog_tables.sql`.

use chrono::Datelike;

use crate::error::CoreError;
use crate::types::DbId;

/// Seeded `categories` row that `ON DELETE SET DEFAULT` re-points titles at.
pub const DEFAULT_CATEGORY_ID: DbId = 1;

/// Seeded `genres` row that `ON DELETE SET DEFAULT` re-points associations at.
pub const DEFAULT_GENRE_ID: DbId = 1;

/// Maximum length for a category or genre name.
pub const MAX_LOOKUP_NAME_LENGTH: usize = 200;

/// Maximum length for a slug.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Maximum length for a title name.
pub const MAX_TITLE_NAME_LENGTH: usize = 200;

/// The current calendar year, UTC. Upper bound for a title's release year.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Validate a category or genre name: required, non-blank, bounded length.
pub fn validate_lookup_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be blank".to_string()));
    }
    if name.chars().count() > MAX_LOOKUP_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_LOOKUP_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a slug: non-empty, bounded length, URL-safe.
///
/// Accepts lowercase ASCII letters, digits, `-`, and `_`.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug exceeds maximum length of {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Only lowercase letters, digits, '-' and '_' are allowed"
        )));
    }
    Ok(())
}

/// Validate a title name: required, non-blank, bounded length.
pub fn validate_title_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title name must not be blank".to_string(),
        ));
    }
    if name.chars().count() > MAX_TITLE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title name exceeds maximum length of {MAX_TITLE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a release year: between 0 and the current calendar year, inclusive.
///
/// The upper bound is computed at validation time, so it moves with the clock.
pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if year < 0 {
        return Err(CoreError::Validation(format!(
            "Year {year} must not be negative"
        )));
    }
    let max = current_year();
    if year > max {
        return Err(CoreError::Validation(format!(
            "Year {year} is in the future (maximum {max})"
        )));
    }
    Ok(())
}

//! Review and comment constraints.

use crate::error::CoreError;

/// Lowest score a review can give.
pub const MIN_SCORE: i32 = 1;

/// Highest score a review can give.
pub const MAX_SCORE: i32 = 10;

/// Number of characters shown when a review or comment is rendered inline.
pub const PREVIEW_LENGTH: usize = 15;

/// Validate a review score: between [`MIN_SCORE`] and [`MAX_SCORE`], inclusive.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Validation(format!(
            "Score {score} is out of range ({MIN_SCORE}-{MAX_SCORE})"
        )));
    }
    Ok(())
}

/// Validate review or comment text: required, non-blank.
pub fn validate_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Text must not be blank".to_string()));
    }
    Ok(())
}

/// First [`PREVIEW_LENGTH`] characters of `text`, cut on a char boundary.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_LENGTH) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

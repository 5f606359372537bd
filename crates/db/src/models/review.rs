//! Review entity model and DTOs.

use std::fmt;

use critica_core::reviews::preview;
use critica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
///
/// At most one review exists per (title, author) pair. `created_at` is the
/// publication timestamp.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub title_id: DbId,
    pub author_id: DbId,
    pub text: String,
    /// Score in 1..=10.
    pub score: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.text))
    }
}

/// DTO for creating a new review. A missing `score` defaults to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub title_id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub score: Option<i32>,
}

/// DTO for updating an existing review. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub text: Option<String>,
    pub score: Option<i32>,
}

//! Comment entity model and DTOs.

use std::fmt;

use critica_core::reviews::preview;
use critica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table. Comments hang off a review and die with
/// it; `created_at` is indexed for retrieval ordering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub review_id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(preview(&self.text))
    }
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub review_id: DbId,
    pub author_id: DbId,
    pub text: String,
}

/// DTO for updating an existing comment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComment {
    pub text: Option<String>,
}

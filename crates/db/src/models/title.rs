//! Title model, genre association row, and DTOs.

use std::fmt;

use critica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `titles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Title {
    pub id: DbId,
    pub name: String,
    /// Release year, 0..=current calendar year.
    pub year: i32,
    /// Never dangling: deleting the category re-points this at the sentinel.
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A row from the `title_genres` association table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TitleGenre {
    pub id: DbId,
    pub title_id: DbId,
    pub genre_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new title. A missing `category_id` assigns the
/// sentinel category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTitle {
    pub name: String,
    pub year: i32,
    pub category_id: Option<DbId>,
}

/// DTO for updating an existing title. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTitle {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub category_id: Option<DbId>,
}

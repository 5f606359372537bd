//! Genre lookup-table model and DTOs.

use std::fmt;

use critica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table.
///
/// Row id 1 is the sentinel genre that title associations fall back to when
/// their genre is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    pub slug: String,
}

/// DTO for updating an existing genre. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub slug: Option<String>,
}

//! Repository for the `genres` table.

use critica_core::catalog::{self, DEFAULT_GENRE_ID};
use critica_core::error::CoreError;
use critica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> DbResult<Genre> {
        catalog::validate_lookup_name(&input.name)?;
        catalog::validate_slug(&input.slug)?;

        let query = format!(
            "INSERT INTO genres (name, slug)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let genre = sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await?;
        Ok(genre)
    }

    /// Find a genre by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Genre>> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        let genre = sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(genre)
    }

    /// Find a genre by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<Genre>> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE slug = $1");
        let genre = sqlx::query_as::<_, Genre>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(genre)
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Genre>> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name ASC");
        let genres = sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await?;
        Ok(genres)
    }

    /// Update a genre. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateGenre) -> DbResult<Option<Genre>> {
        if let Some(name) = &input.name {
            catalog::validate_lookup_name(name)?;
        }
        if let Some(slug) = &input.slug {
            catalog::validate_slug(slug)?;
        }

        let query = format!(
            "UPDATE genres SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let genre = sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await?;
        Ok(genre)
    }

    /// Delete a genre. Title associations referencing it are re-pointed at
    /// the sentinel genre by the schema's `ON DELETE SET DEFAULT` rule.
    ///
    /// The sentinel itself cannot be deleted. Returns `true` if the row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        if id == DEFAULT_GENRE_ID {
            return Err(
                CoreError::Conflict("The default genre cannot be deleted".to_string()).into(),
            );
        }
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `titles` and `title_genres` tables.

use critica_core::catalog::{self, DEFAULT_CATEGORY_ID};
use critica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::genre::Genre;
use crate::models::title::{CreateTitle, Title, TitleGenre, UpdateTitle};

/// Column list for titles queries.
const COLUMNS: &str = "id, name, year, category_id, created_at, updated_at";

/// Column list for title_genres queries.
const GENRE_LINK_COLUMNS: &str = "id, title_id, genre_id, created_at, updated_at";

/// Provides CRUD operations for titles and their genre associations.
pub struct TitleRepo;

impl TitleRepo {
    /// Insert a new title, returning the created row.
    ///
    /// A missing `category_id` assigns the sentinel category.
    pub async fn create(pool: &PgPool, input: &CreateTitle) -> DbResult<Title> {
        catalog::validate_title_name(&input.name)?;
        catalog::validate_year(input.year)?;

        let query = format!(
            "INSERT INTO titles (name, year, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let title = sqlx::query_as::<_, Title>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.category_id.unwrap_or(DEFAULT_CATEGORY_ID))
            .fetch_one(pool)
            .await?;
        Ok(title)
    }

    /// Find a title by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Title>> {
        let query = format!("SELECT {COLUMNS} FROM titles WHERE id = $1");
        let title = sqlx::query_as::<_, Title>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(title)
    }

    /// List all titles ordered by name.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Title>> {
        let query = format!("SELECT {COLUMNS} FROM titles ORDER BY name ASC, id ASC");
        let titles = sqlx::query_as::<_, Title>(&query).fetch_all(pool).await?;
        Ok(titles)
    }

    /// List all titles in a category, ordered by name.
    pub async fn list_by_category(pool: &PgPool, category_id: DbId) -> DbResult<Vec<Title>> {
        let query = format!(
            "SELECT {COLUMNS} FROM titles
             WHERE category_id = $1
             ORDER BY name ASC, id ASC"
        );
        let titles = sqlx::query_as::<_, Title>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;
        Ok(titles)
    }

    /// Update a title. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTitle) -> DbResult<Option<Title>> {
        if let Some(name) = &input.name {
            catalog::validate_title_name(name)?;
        }
        if let Some(year) = input.year {
            catalog::validate_year(year)?;
        }

        let query = format!(
            "UPDATE titles SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                category_id = COALESCE($4, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let title = sqlx::query_as::<_, Title>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        Ok(title)
    }

    /// Delete a title. Its genre associations and reviews cascade away.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM titles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach a genre to a title, returning the association row.
    ///
    /// Attaching an already-attached genre returns the existing row.
    pub async fn add_genre(pool: &PgPool, title_id: DbId, genre_id: DbId) -> DbResult<TitleGenre> {
        if let Some(existing) = Self::find_genre_link(pool, title_id, genre_id).await? {
            return Ok(existing);
        }

        let query = format!(
            "INSERT INTO title_genres (title_id, genre_id)
             VALUES ($1, $2)
             RETURNING {GENRE_LINK_COLUMNS}"
        );
        let link = sqlx::query_as::<_, TitleGenre>(&query)
            .bind(title_id)
            .bind(genre_id)
            .fetch_one(pool)
            .await?;
        Ok(link)
    }

    /// Detach a genre from a title. Returns `true` if an association existed.
    pub async fn remove_genre(pool: &PgPool, title_id: DbId, genre_id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM title_genres WHERE title_id = $1 AND genre_id = $2")
            .bind(title_id)
            .bind(genre_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the genres attached to a title, ordered by name.
    pub async fn list_genres(pool: &PgPool, title_id: DbId) -> DbResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            "SELECT DISTINCT g.id, g.name, g.slug, g.created_at, g.updated_at
             FROM genres g
             JOIN title_genres tg ON tg.genre_id = g.id
             WHERE tg.title_id = $1
             ORDER BY g.name ASC",
        )
        .bind(title_id)
        .fetch_all(pool)
        .await?;
        Ok(genres)
    }

    /// The association row for (title, genre), if any.
    pub async fn find_genre_link(
        pool: &PgPool,
        title_id: DbId,
        genre_id: DbId,
    ) -> DbResult<Option<TitleGenre>> {
        let query = format!(
            "SELECT {GENRE_LINK_COLUMNS} FROM title_genres
             WHERE title_id = $1 AND genre_id = $2
             ORDER BY id ASC
             LIMIT 1"
        );
        let link = sqlx::query_as::<_, TitleGenre>(&query)
            .bind(title_id)
            .bind(genre_id)
            .fetch_optional(pool)
            .await?;
        Ok(link)
    }
}

//! Repository for the `reviews` table.

use critica_core::reviews;
use critica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::review::{CreateReview, Review, UpdateReview};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_id, author_id, text, score, created_at, updated_at";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    ///
    /// A missing `score` defaults to 1. A second review by the same author
    /// for the same title violates `uq_reviews_title_author`.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> DbResult<Review> {
        let score = input.score.unwrap_or(reviews::MIN_SCORE);
        reviews::validate_text(&input.text)?;
        reviews::validate_score(score)?;

        let query = format!(
            "INSERT INTO reviews (title_id, author_id, text, score)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(input.title_id)
            .bind(input.author_id)
            .bind(&input.text)
            .bind(score)
            .fetch_one(pool)
            .await?;
        Ok(review)
    }

    /// Find a review by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Review>> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(review)
    }

    /// The unique review by `author_id` for `title_id`, if any.
    pub async fn find_by_title_and_author(
        pool: &PgPool,
        title_id: DbId,
        author_id: DbId,
    ) -> DbResult<Option<Review>> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE title_id = $1 AND author_id = $2"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(title_id)
            .bind(author_id)
            .fetch_optional(pool)
            .await?;
        Ok(review)
    }

    /// List all reviews for a title, newest first.
    pub async fn list_by_title(pool: &PgPool, title_id: DbId) -> DbResult<Vec<Review>> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE title_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let reviews = sqlx::query_as::<_, Review>(&query)
            .bind(title_id)
            .fetch_all(pool)
            .await?;
        Ok(reviews)
    }

    /// List all reviews by an author, newest first.
    pub async fn list_by_author(pool: &PgPool, author_id: DbId) -> DbResult<Vec<Review>> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let reviews = sqlx::query_as::<_, Review>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await?;
        Ok(reviews)
    }

    /// Update a review's text and/or score. Only non-`None` fields are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateReview) -> DbResult<Option<Review>> {
        if let Some(text) = &input.text {
            reviews::validate_text(text)?;
        }
        if let Some(score) = input.score {
            reviews::validate_score(score)?;
        }

        let query = format!(
            "UPDATE reviews SET
                text = COALESCE($2, text),
                score = COALESCE($3, score)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.score)
            .fetch_optional(pool)
            .await?;
        Ok(review)
    }

    /// Delete a review. Its comments cascade away.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Average score across all reviews of a title. `None` when the title
    /// has no reviews.
    pub async fn average_score(pool: &PgPool, title_id: DbId) -> DbResult<Option<f64>> {
        let avg: Option<f64> =
            sqlx::query_scalar("SELECT AVG(score)::float8 FROM reviews WHERE title_id = $1")
                .bind(title_id)
                .fetch_one(pool)
                .await?;
        Ok(avg)
    }
}

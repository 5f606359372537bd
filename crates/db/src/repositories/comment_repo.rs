//! Repository for the `comments` table.

use critica_core::reviews;
use critica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::comment::{Comment, CreateComment, UpdateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, review_id, author_id, text, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> DbResult<Comment> {
        reviews::validate_text(&input.text)?;

        let query = format!(
            "INSERT INTO comments (review_id, author_id, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(input.review_id)
            .bind(input.author_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await?;
        Ok(comment)
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Comment>> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(comment)
    }

    /// List all comments on a review, oldest first. Served by the
    /// `created_at` index.
    pub async fn list_by_review(pool: &PgPool, review_id: DbId) -> DbResult<Vec<Comment>> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE review_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .fetch_all(pool)
            .await?;
        Ok(comments)
    }

    /// Update a comment's text.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> DbResult<Option<Comment>> {
        if let Some(text) = &input.text {
            reviews::validate_text(text)?;
        }

        let query = format!(
            "UPDATE comments SET
                text = COALESCE($2, text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.text)
            .fetch_optional(pool)
            .await?;
        Ok(comment)
    }

    /// Delete a comment.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `categories` table.

use critica_core::catalog::{self, DEFAULT_CATEGORY_ID};
use critica_core::error::CoreError;
use critica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> DbResult<Category> {
        catalog::validate_lookup_name(&input.name)?;
        catalog::validate_slug(&input.slug)?;

        let query = format!(
            "INSERT INTO categories (name, slug)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Find a category by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// Find a category by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await?;
        Ok(categories)
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> DbResult<Option<Category>> {
        if let Some(name) = &input.name {
            catalog::validate_lookup_name(name)?;
        }
        if let Some(slug) = &input.slug {
            catalog::validate_slug(slug)?;
        }

        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// Delete a category. Titles referencing it are re-pointed at the
    /// sentinel category by the schema's `ON DELETE SET DEFAULT` rule.
    ///
    /// The sentinel itself cannot be deleted. Returns `true` if the row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        if id == DEFAULT_CATEGORY_ID {
            return Err(
                CoreError::Conflict("The default category cannot be deleted".to_string()).into(),
            );
        }
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `users` table.

use critica_core::types::DbId;
use critica_core::users;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, role, bio, first_name, last_name, \
                       created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> DbResult<User> {
        users::validate_username(&input.username)?;
        users::validate_email(&input.email)?;
        users::validate_role(&input.role)?;
        if let Some(name) = &input.first_name {
            users::validate_person_name(name)?;
        }
        if let Some(name) = &input.last_name {
            users::validate_person_name(name)?;
        }

        let query = format!(
            "INSERT INTO users (username, email, role, bio, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.role)
            .bind(input.bio.as_deref().unwrap_or(""))
            .bind(input.first_name.as_deref().unwrap_or(""))
            .bind(input.last_name.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(pool: &PgPool, username: &str) -> DbResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;
        Ok(users)
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> DbResult<Option<User>> {
        if let Some(email) = &input.email {
            users::validate_email(email)?;
        }
        if let Some(role) = &input.role {
            users::validate_role(role)?;
        }
        if let Some(name) = &input.first_name {
            users::validate_person_name(name)?;
        }
        if let Some(name) = &input.last_name {
            users::validate_person_name(name)?;
        }

        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                first_name = COALESCE($5, first_name),
                last_name = COALESCE($6, last_name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Delete a user. Their reviews and comments cascade away.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

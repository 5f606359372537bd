use critica_core::error::CoreError;

/// Error type for repository operations.
///
/// Wraps [`CoreError`] for validation and domain failures and [`sqlx::Error`]
/// for everything the database reports.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `critica-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Convenience type alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Whether this is a PostgreSQL unique constraint violation (error code
    /// 23505), e.g. a duplicate username, slug, or second review for the
    /// same (title, author) pair.
    pub fn is_unique_violation(&self) -> bool {
        self.unique_constraint().is_some()
    }

    /// Name of the violated unique constraint, if this is a unique
    /// violation. All unique constraints in the schema are named `uq_*`.
    pub fn unique_constraint(&self) -> Option<&str> {
        match self {
            DbError::Sqlx(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some("23505") =>
            {
                db_err.constraint()
            }
            _ => None,
        }
    }
}

/// Database configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables, reading a `.env` file
    /// first if one is present.
    ///
    /// | Env Var                    | Default      |
    /// |----------------------------|--------------|
    /// | `DATABASE_URL`             | *(required)* |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`         |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            database_url,
            max_connections,
        }
    }
}

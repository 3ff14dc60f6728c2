pub mod test_helpers {
    use crate::models::PROFILE_ID;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use tempfile::NamedTempFile;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    pub async fn create_test_db_file() -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let database_url = format!("sqlite://{}", db_path);

        let pool = crate::db::create_pool(&database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok((pool, temp_file))
    }

    /// Insert a user row with an explicit id
    pub async fn insert_test_user(
        pool: &SqlitePool,
        id: i64,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (id, name, email, phone) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(phone)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert the singleton profile row
    pub async fn seed_profile(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        insert_test_user(pool, PROFILE_ID, "Jane Doe", "jane@example.com", "555-0100").await
    }
}

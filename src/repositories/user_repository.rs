use crate::models::user::{ProfileUpdate, User};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User not found")]
    NotFound,
    #[error("Email already in use")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> RepositoryResult<()>;
    async fn upsert_profile(
        &self,
        id: i64,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RepositoryResult<User>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    let is_unique = err
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if is_unique {
        RepositoryError::AlreadyExists
    } else {
        RepositoryError::Database(err)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ?, phone = ? WHERE id = ?")
            .bind(update.name.as_deref())
            .bind(update.email.as_deref())
            .bind(update.phone.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn upsert_profile(
        &self,
        id: i64,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RepositoryResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, phone) VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                phone = excluded.phone
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }
}

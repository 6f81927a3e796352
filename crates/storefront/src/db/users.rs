//! User repository for database operations.
//!
//! Queries are built at runtime with `sqlx::query_as` and mapped through
//! explicit row structs.

use sqlx::SqlitePool;
use tracing::instrument;

use byte_shop_core::{UserId, Username};

use super::RepositoryError;
use crate::models::User;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
}

#[derive(sqlx::FromRow)]
struct UserPasswordRow {
    id: i64,
    username: String,
    password: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            username,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// Uniqueness is enforced by the `UNIQUE` constraint on `username`, so
    /// concurrent inserts of the same name yield exactly one row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, password_hash), fields(username = %username))]
    pub async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (username, password)
            VALUES (?, ?)
            RETURNING id, username
            ",
        )
        .bind(username.as_str())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_insert(e, "username already exists"))?;

        User::try_from(row)
    }

    /// Get a user and their password hash by username.
    ///
    /// Returns `None` if no user has that username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self), fields(username = %username))]
    pub async fn get_with_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserPasswordRow>(
            r"
            SELECT id, username, password
            FROM users
            WHERE username = ?
            ",
        )
        .bind(username.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let user = User::try_from(UserRow {
            id: r.id,
            username: r.username,
        })?;

        Ok(Some((user, r.password)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    fn name(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let user = repo.create(&name("sofia"), "hash-1").await.unwrap();
        assert_eq!(user.username.as_str(), "sofia");

        let (found, hash) = repo
            .get_with_password_hash(&name("sofia"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, user);
        assert_eq!(hash, "hash-1");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        repo.create(&name("sofia"), "hash-1").await.unwrap();
        let err = repo.create(&name("sofia"), "hash-2").await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'sofia'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_unknown_username_is_none() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let found = repo.get_with_password_hash(&name("nadie")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let a = repo.create(&name("a"), "h").await.unwrap();
        let b = repo.create(&name("b"), "h").await.unwrap();
        assert_ne!(a.id, b.id);
    }
}

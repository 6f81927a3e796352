//! Contact message repository.
//!
//! Contacts are append-only; the application never reads them back except in tests.

use sqlx::SqlitePool;
use tracing::instrument;

use byte_shop_core::ContactId;

use super::RepositoryError;
use crate::models::{Contact, NewContact};

/// Repository for contact form submissions.
pub struct ContactRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContactRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a contact message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, contact), fields(email = %contact.email()))]
    pub async fn create(&self, contact: &NewContact) -> Result<Contact, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO contacts (name, email, message)
            VALUES (?, ?, ?)
            RETURNING id
            ",
        )
        .bind(contact.name())
        .bind(contact.email())
        .bind(contact.message())
        .fetch_one(self.pool)
        .await?;

        Ok(Contact {
            id: ContactId::new(id),
            name: contact.name().to_owned(),
            email: contact.email().to_owned(),
            message: contact.message().to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    #[tokio::test]
    async fn test_create_appends_row() {
        let pool = test_pool().await;
        let repo = ContactRepository::new(&pool);

        let contact = NewContact::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "¿Tienen talle L?".to_string(),
        )
        .unwrap();

        let first = repo.create(&contact).await.unwrap();
        let second = repo.create(&contact).await.unwrap();
        assert_ne!(first.id, second.id);

        let stored: (String, String, String) =
            sqlx::query_as("SELECT name, email, message FROM contacts WHERE id = ?")
                .bind(first.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(
            stored,
            (
                "Ana".to_string(),
                "ana@example.com".to_string(),
                "¿Tienen talle L?".to_string()
            )
        );
    }
}

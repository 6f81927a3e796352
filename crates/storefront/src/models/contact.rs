//! Contact form submission types.

use byte_shop_core::ContactId;
use thiserror::Error;

/// A required contact field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct ContactError(pub &'static str);

/// A contact message ready to be stored.
///
/// Fields are checked for presence only; the email address is not
/// format-validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    message: String,
}

impl NewContact {
    /// Build a contact submission.
    ///
    /// # Errors
    ///
    /// Returns `ContactError` naming the first field that is empty or only
    /// whitespace.
    pub fn new(name: String, email: String, message: String) -> Result<Self, ContactError> {
        for (field, value) in [("name", &name), ("email", &email), ("message", &message)] {
            if value.trim().is_empty() {
                return Err(ContactError(field));
            }
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
}

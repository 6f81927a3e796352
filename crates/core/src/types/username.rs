//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input string is empty or only whitespace.
    #[error("username cannot be empty")]
    Empty,
}

/// A login name.
///
/// The shop only requires that a username is present; there are no length or
/// character-set rules. Surrounding whitespace is preserved so the stored
/// value is exactly what the user typed.
///
/// ## Examples
///
/// ```
/// use byte_shop_core::Username;
///
/// assert!(Username::parse("ana").is_ok());
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns `UsernameError::Empty` if the input has no non-whitespace characters.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        if s.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(s))
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let username = Username::parse(" maria ").unwrap();
        assert_eq!(username.as_str(), " maria ");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(Username::parse(""), Err(UsernameError::Empty));
        assert_eq!(Username::parse("\t\n"), Err(UsernameError::Empty));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Username = serde_json::from_str("\"lucas\"").unwrap();
        assert_eq!(ok.to_string(), "lucas");

        let err: Result<Username, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}

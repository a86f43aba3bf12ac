//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name.
///
/// Names carry no validation rule; any string is accepted. The name is the
/// key a [`ContactBook`](crate::models::ContactBook) stores a record under.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Name;
///
/// let name = Name::new("Alice");
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_anything() {
        assert_eq!(Name::new("Alice").as_str(), "Alice");
        assert_eq!(Name::new("").as_str(), "");
        assert_eq!(Name::new("  spaced  ").as_str(), "  spaced  ");
    }

    #[test]
    fn test_name_display() {
        let name = Name::from("Bob");
        assert_eq!(format!("{}", name), "Bob");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Alice");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alice\"");

        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}

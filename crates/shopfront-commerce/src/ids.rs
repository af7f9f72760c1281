//! Newtype identifiers.
//!
//! Product ids are CMS document ids (`_id`), so they are opaque strings and
//! never generated locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc123""#);
        let back: ProductId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(back, id);
    }
}

//! Identifiers shared by every host-owned document.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a host document (table, actor, item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Generate a new random document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Unique identifier for a user connected to the host session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What kind of document an entry link points at.
///
/// Only [`DocumentKind::Table`] links participate in recursive expansion
/// during a treasure draw; links to any other kind pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Another roll table.
    Table,
    /// A character or creature document.
    Actor,
    /// A physical object document.
    Item,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Actor => write!(f, "actor"),
            Self::Item => write!(f, "item"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_ids_are_unique() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_short_form() {
        let id = DocumentId::new();
        assert_eq!(id.to_string().len(), 8);
        let user = UserId::new();
        assert_eq!(user.to_string().len(), 8);
    }

    #[test]
    fn kind_display() {
        assert_eq!(DocumentKind::Table.to_string(), "table");
        assert_eq!(DocumentKind::Actor.to_string(), "actor");
        assert_eq!(DocumentKind::Item.to_string(), "item");
    }

    #[test]
    fn kind_serde_uses_snake_case() {
        let json = serde_json::to_string(&DocumentKind::Table).unwrap();
        assert_eq!(json, "\"table\"");
    }
}

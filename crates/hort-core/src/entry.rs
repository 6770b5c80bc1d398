//! Weighted table entries and their link kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{DocumentId, DocumentKind};

/// Unique identifier for an entry within a roll table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a new random entry ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What an entry resolves to when it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    /// A plain text result with no linked document.
    Text,
    /// A link to a document in the local world collection.
    Document {
        /// The kind of the linked document.
        kind: DocumentKind,
        /// The linked document's ID.
        id: DocumentId,
    },
    /// A link to a document inside a named compendium pack. The pack itself
    /// declares what kind of documents it holds.
    Compendium {
        /// The compendium pack name, e.g. `"hort.hoards"`.
        pack: String,
        /// The linked document's ID within the pack.
        id: DocumentId,
    },
}

impl EntryKind {
    /// Whether this entry links to another document at all.
    pub fn is_link(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// One weighted candidate result belonging to a roll table.
///
/// The weight is interpreted on a fixed 1-100 percentile scale as the
/// inclusive upper bound of a trial: weight 100 always succeeds, weight 1
/// succeeds on roughly 1% of draws, weight 0 can never succeed. Once `drawn`
/// is set the entry is excluded from every draw until the host resets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Unique ID of this entry.
    pub id: EntryId,
    /// Display text of the result.
    pub text: String,
    /// Inclusive percentile upper bound for a successful trial.
    pub weight: u32,
    /// Whether this entry has already been drawn.
    pub drawn: bool,
    /// What the entry resolves to.
    pub kind: EntryKind,
}

impl TableEntry {
    /// Create a plain text entry with the given weight.
    pub fn new(text: impl Into<String>, weight: u32) -> Self {
        Self {
            id: EntryId::new(),
            text: text.into(),
            weight,
            drawn: false,
            kind: EntryKind::Text,
        }
    }

    /// Turn this entry into a link to a local document.
    pub fn with_document(mut self, kind: DocumentKind, id: DocumentId) -> Self {
        self.kind = EntryKind::Document { kind, id };
        self
    }

    /// Turn this entry into a link into a named compendium pack.
    pub fn with_compendium(mut self, pack: impl Into<String>, id: DocumentId) -> Self {
        self.kind = EntryKind::Compendium {
            pack: pack.into(),
            id,
        };
        self
    }

    /// Mark this entry as already drawn.
    pub fn with_drawn(mut self, drawn: bool) -> Self {
        self.drawn = drawn;
        self
    }

    /// Whether a percentile trial with the given value draws this entry.
    ///
    /// Drawn entries never succeed regardless of weight.
    pub fn succeeds_on(&self, value: u32) -> bool {
        !self.drawn && value <= self.weight
    }
}

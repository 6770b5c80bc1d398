//! Local table collections and read-only compendium packs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::{DocumentId, DocumentKind};
use crate::error::{HortError, HortResult};
use crate::table::RollTable;

/// The local world's directory of roll tables.
///
/// Names are unique case-insensitively, matching how the host resolves
/// documents typed into its UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCollection {
    tables: HashMap<DocumentId, RollTable>,
    by_name_lower: HashMap<String, DocumentId>,
}

impl TableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the collection. Returns the table's ID.
    pub fn insert(&mut self, table: RollTable) -> HortResult<DocumentId> {
        let name_lower = table.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(HortError::DuplicateName(table.name.clone()));
        }
        let id = table.id;
        self.by_name_lower.insert(name_lower, id);
        self.tables.insert(id, table);
        Ok(id)
    }

    /// Look up a table by ID.
    pub fn get(&self, id: DocumentId) -> Option<&RollTable> {
        self.tables.get(&id)
    }

    /// Look up a table by ID for modification.
    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut RollTable> {
        self.tables.get_mut(&id)
    }

    /// Look up a table by name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&RollTable> {
        let id = self.by_name_lower.get(&name.to_lowercase())?;
        self.tables.get(id)
    }

    /// Remove a table, returning it if it existed.
    pub fn remove(&mut self, id: DocumentId) -> Option<RollTable> {
        let table = self.tables.remove(&id)?;
        self.by_name_lower.remove(&table.name.to_lowercase());
        Some(table)
    }

    /// Iterate over all tables in the collection.
    pub fn iter(&self) -> impl Iterator<Item = &RollTable> {
        self.tables.values()
    }

    /// Number of tables in the collection.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the collection holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A named external read-only collection of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compendium {
    name: String,
    label: String,
    kind: DocumentKind,
    documents: HashMap<DocumentId, RollTable>,
}

impl Compendium {
    /// Create a pack holding the given documents.
    ///
    /// Only packs of kind [`DocumentKind::Table`] hold documents this module
    /// can draw from; packs of other kinds exist so entry links can resolve
    /// their kind.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: DocumentKind,
        documents: Vec<RollTable>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            documents: documents.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// The pack's unique name, e.g. `"hort.hoards"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pack's human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The kind of documents this pack holds.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Fetch a document from the pack by ID.
    pub fn document(&self, id: DocumentId) -> Option<&RollTable> {
        self.documents.get(&id)
    }

    /// Number of documents in the pack.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the pack holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The host's registry of compendium packs, keyed by pack name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompendiumSet {
    packs: HashMap<String, Compendium>,
}

impl CompendiumSet {
    /// Create an empty pack registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pack, replacing any pack with the same name.
    pub fn register(&mut self, pack: Compendium) {
        self.packs.insert(pack.name().to_string(), pack);
    }

    /// Look up a pack by name.
    pub fn get(&self, name: &str) -> Option<&Compendium> {
        self.packs.get(name)
    }

    /// Iterate over all registered packs.
    pub fn iter(&self) -> impl Iterator<Item = &Compendium> {
        self.packs.values()
    }

    /// Number of registered packs.
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Whether no packs are registered.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

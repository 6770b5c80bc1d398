//! The roll-table document and its subtype dispatch tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DocumentId;
use crate::entry::{EntryId, TableEntry};
use crate::flags::{self, Flags};

/// The accepted roll-table subtypes.
///
/// The subtype selects which draw algorithm runs: `Base` tables draw a single
/// result against the cumulative weight span, `Treasure` tables roll one
/// independent percentile trial per entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// The host's native roll-table behavior.
    #[default]
    #[serde(rename = "base")]
    Base,
    /// The weighted per-entry treasure draw.
    #[serde(rename = "treasureTable")]
    Treasure,
}

impl TableKind {
    /// The subtype string used in creation payloads and persisted flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Treasure => "treasureTable",
        }
    }

    /// Parse a subtype string back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "treasureTable" => Some(Self::Treasure),
            _ => None,
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A host document listing weighted candidate entries for random selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollTable {
    /// Unique ID of this table.
    pub id: DocumentId,
    /// Display name of this table.
    pub name: String,
    /// Free-form description shown on the configuration sheet.
    pub description: String,
    /// The base dice formula, e.g. `"1d100"`. A table with an empty formula
    /// has nothing to draw.
    pub formula: String,
    /// The ordered candidate entries.
    pub entries: Vec<TableEntry>,
    /// Namespaced document metadata persisted by the host.
    pub flags: Flags,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last modified.
    pub updated_at: DateTime<Utc>,
}

impl RollTable {
    /// Create an empty table with the default percentile formula.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::new(),
            name: name.into(),
            description: String::new(),
            formula: "1d100".to_string(),
            entries: Vec::new(),
            flags: Flags::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the base formula.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }

    /// Replace the entry list.
    pub fn with_entries(mut self, entries: Vec<TableEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Append an entry to the table.
    pub fn add_entry(&mut self, entry: TableEntry) {
        self.entries.push(entry);
        self.updated_at = Utc::now();
    }

    /// Look up an entry by ID.
    pub fn entry(&self, id: EntryId) -> Option<&TableEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The not-yet-drawn entries, in sequence order.
    pub fn available(&self) -> Vec<&TableEntry> {
        self.entries.iter().filter(|e| !e.drawn).collect()
    }

    /// Whether the table declares a base formula at all.
    pub fn has_formula(&self) -> bool {
        !self.formula.trim().is_empty()
    }

    /// The subtype this table was tagged with, defaulting to [`TableKind::Base`]
    /// for documents the module never tagged.
    pub fn table_kind(&self) -> TableKind {
        self.flags
            .get(flags::MODULE_SCOPE, flags::TABLE_TYPE_KEY)
            .and_then(Value::as_str)
            .and_then(TableKind::parse)
            .unwrap_or_default()
    }

    /// Set a document flag.
    pub fn set_flag(&mut self, scope: impl Into<String>, key: impl Into<String>, value: Value) {
        self.flags.set(scope, key, value);
        self.updated_at = Utc::now();
    }

    /// Look up a document flag.
    pub fn flag(&self, scope: &str, key: &str) -> Option<&Value> {
        self.flags.get(scope, key)
    }

    /// Finalize a draw by marking the given entries as drawn.
    ///
    /// This is the host-owned commit step; the draw engine itself never
    /// mutates drawn state. Returns how many entries changed state.
    pub fn mark_drawn(&mut self, ids: &[EntryId]) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            if !entry.drawn && ids.contains(&entry.id) {
                entry.drawn = true;
                changed += 1;
            }
        }
        if changed > 0 {
            self.updated_at = Utc::now();
        }
        changed
    }

    /// Clear the drawn flag on every entry, returning how many were reset.
    pub fn reset_draws(&mut self) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            if entry.drawn {
                entry.drawn = false;
                changed += 1;
            }
        }
        if changed > 0 {
            self.updated_at = Utc::now();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_string_round_trip() {
        assert_eq!(TableKind::parse("base"), Some(TableKind::Base));
        assert_eq!(TableKind::parse("treasureTable"), Some(TableKind::Treasure));
        assert_eq!(TableKind::parse("loot"), None);
        assert_eq!(TableKind::Treasure.as_str(), "treasureTable");
    }

    #[test]
    fn kind_serde_matches_flag_strings() {
        assert_eq!(
            serde_json::to_string(&TableKind::Treasure).unwrap(),
            "\"treasureTable\""
        );
    }

    #[test]
    fn new_table_defaults() {
        let table = RollTable::new("Hoard A");
        assert_eq!(table.name, "Hoard A");
        assert!(table.has_formula());
        assert_eq!(table.table_kind(), TableKind::Base);
        assert!(table.entries.is_empty());
    }

    #[test]
    fn empty_formula_detected() {
        let table = RollTable::new("Hoard A").with_formula("");
        assert!(!table.has_formula());
        let table = RollTable::new("Hoard B").with_formula("  ");
        assert!(!table.has_formula());
    }

    #[test]
    fn table_kind_reads_module_flag() {
        let mut table = RollTable::new("Hoard A");
        table.set_flag(
            crate::flags::MODULE_SCOPE,
            crate::flags::TABLE_TYPE_KEY,
            json!("treasureTable"),
        );
        assert_eq!(table.table_kind(), TableKind::Treasure);
    }

    #[test]
    fn unknown_flag_value_falls_back_to_base() {
        let mut table = RollTable::new("Hoard A");
        table.set_flag(
            crate::flags::MODULE_SCOPE,
            crate::flags::TABLE_TYPE_KEY,
            json!("loot"),
        );
        assert_eq!(table.table_kind(), TableKind::Base);
    }

    #[test]
    fn available_excludes_drawn() {
        let table = RollTable::new("Hoard A").with_entries(vec![
            TableEntry::new("Gold", 50),
            TableEntry::new("Gems", 25).with_drawn(true),
            TableEntry::new("Silver", 75),
        ]);
        let available = table.available();
        assert_eq!(available.len(), 2);
        assert_eq!(available[0].text, "Gold");
        assert_eq!(available[1].text, "Silver");
    }

    #[test]
    fn mark_drawn_and_reset() {
        let mut table = RollTable::new("Hoard A").with_entries(vec![
            TableEntry::new("Gold", 50),
            TableEntry::new("Gems", 25),
        ]);
        let first = table.entries[0].id;
        assert_eq!(table.mark_drawn(&[first]), 1);
        assert!(table.entries[0].drawn);
        assert_eq!(table.available().len(), 1);

        // Marking the same entry again changes nothing.
        assert_eq!(table.mark_drawn(&[first]), 0);

        assert_eq!(table.reset_draws(), 1);
        assert_eq!(table.available().len(), 2);
        assert_eq!(table.reset_draws(), 0);
    }

    #[test]
    fn entry_lookup() {
        let table =
            RollTable::new("Hoard A").with_entries(vec![TableEntry::new("Gold", 50)]);
        let id = table.entries[0].id;
        assert_eq!(table.entry(id).unwrap().text, "Gold");
        assert!(table.entry(EntryId::new()).is_none());
    }
}

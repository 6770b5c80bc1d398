//! The sheet-class and type-label registry.
//!
//! Mirrors the host's UI-configuration registry: each table subtype maps to
//! the configuration sheets registered for it and a display label, and the
//! sorted list of known subtypes feeds the host's creation dialog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hort_core::flags;
use hort_core::table::TableKind;

/// Sheet class name for the treasure configuration sheet.
pub const TREASURE_SHEET: &str = "TreasureTableSheet";

/// Sheet class name for the host's native roll-table sheet.
pub const BASE_SHEET: &str = "RollTableSheet";

/// The fully qualified sheet class identifier persisted into the generic
/// sheet-selection flag for a given subtype.
pub fn sheet_class_id(kind: TableKind) -> String {
    match kind {
        TableKind::Base => format!("{}.{BASE_SHEET}", flags::CORE_SCOPE),
        TableKind::Treasure => format!("{}.{TREASURE_SHEET}", flags::MODULE_SCOPE),
    }
}

/// A registered configuration sheet for a table subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Fully qualified sheet class identifier, e.g. `"hort.TreasureTableSheet"`.
    pub id: String,
    /// Localized sheet label.
    pub label: String,
    /// Path of the sheet's render template.
    pub template: String,
    /// CSS classes applied to the rendered sheet.
    pub classes: Vec<String>,
    /// Whether this sheet is the default for its subtype.
    pub make_default: bool,
}

/// Registry of configuration sheets and type labels per table subtype.
#[derive(Debug, Clone)]
pub struct SheetRegistry {
    sheets: BTreeMap<String, Vec<SheetConfig>>,
    type_labels: BTreeMap<String, String>,
    document_types: Vec<String>,
}

impl SheetRegistry {
    /// Create a registry knowing only the host's native subtype.
    pub fn new() -> Self {
        Self {
            sheets: BTreeMap::new(),
            type_labels: BTreeMap::new(),
            document_types: vec![TableKind::Base.as_str().to_string()],
        }
    }

    /// Register a sheet for a subtype and merge its type label.
    ///
    /// A sheet with the same identifier replaces the earlier registration;
    /// the subtype is added to the sorted list of known document types.
    pub fn register_sheet(&mut self, subtype: &str, sheet: SheetConfig, label: &str) {
        let list = self.sheets.entry(subtype.to_string()).or_default();
        if let Some(existing) = list.iter_mut().find(|s| s.id == sheet.id) {
            *existing = sheet;
        } else {
            list.push(sheet);
        }
        self.type_labels.insert(subtype.to_string(), label.to_string());
        if !self.document_types.iter().any(|t| t == subtype) {
            self.document_types.push(subtype.to_string());
            self.document_types.sort();
        }
    }

    /// The sheets registered for a subtype.
    pub fn sheets_for(&self, subtype: &str) -> &[SheetConfig] {
        self.sheets.get(subtype).map_or(&[], Vec::as_slice)
    }

    /// The default sheet for a subtype: the last registration flagged as
    /// default, or the first registered sheet.
    pub fn default_sheet(&self, subtype: &str) -> Option<&SheetConfig> {
        let sheets = self.sheets.get(subtype)?;
        sheets
            .iter()
            .rev()
            .find(|s| s.make_default)
            .or_else(|| sheets.first())
    }

    /// The display label merged for a subtype.
    pub fn label_for(&self, subtype: &str) -> Option<&str> {
        self.type_labels.get(subtype).map(String::as_str)
    }

    /// All merged type labels.
    pub fn type_labels(&self) -> &BTreeMap<String, String> {
        &self.type_labels
    }

    /// The sorted list of known table subtypes.
    pub fn document_types(&self) -> &[String] {
        &self.document_types
    }
}

impl Default for SheetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

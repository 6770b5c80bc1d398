//! Namespaced document flags.
//!
//! Flags are the document-scoped metadata the host persists alongside a
//! document: a two-level map of scope to key to JSON value. The module writes
//! a table's subtype under two scopes, the generic sheet-selection scope the
//! host's sheet chooser reads and the module's own scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The generic scope read by the host's sheet-selection mechanism.
pub const CORE_SCOPE: &str = "core";

/// Key under [`CORE_SCOPE`] holding the preferred sheet class for a document.
pub const SHEET_CLASS_KEY: &str = "sheetClass";

/// The scope owned by this module.
pub const MODULE_SCOPE: &str = "hort";

/// Key under [`MODULE_SCOPE`] holding a table's subtype.
pub const TABLE_TYPE_KEY: &str = "tableType";

/// Document-scoped metadata, keyed by scope and then by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags {
    scopes: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Flags {
    /// Create an empty flag map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag value, overwriting any previous value under the same key.
    pub fn set(&mut self, scope: impl Into<String>, key: impl Into<String>, value: Value) {
        self.scopes
            .entry(scope.into())
            .or_default()
            .insert(key.into(), value);
    }

    /// Look up a flag value.
    pub fn get(&self, scope: &str, key: &str) -> Option<&Value> {
        self.scopes.get(scope).and_then(|keys| keys.get(key))
    }

    /// Remove a flag, returning its previous value if it was set.
    pub fn remove(&mut self, scope: &str, key: &str) -> Option<Value> {
        let keys = self.scopes.get_mut(scope)?;
        let value = keys.remove(key);
        if keys.is_empty() {
            self.scopes.remove(scope);
        }
        value
    }

    /// All keys set under a scope.
    pub fn scope(&self, scope: &str) -> Option<&BTreeMap<String, Value>> {
        self.scopes.get(scope)
    }

    /// Whether no flags are set at all.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

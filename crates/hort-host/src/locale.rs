//! Localization of user-visible registry strings.

use std::collections::BTreeMap;

/// Looks up a display string by localization key.
pub trait Localization {
    /// Translate a key, falling back to the key itself when untranslated.
    fn localize(&self, key: &str) -> String;
}

/// A fixed key-to-string table.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalization {
    strings: BTreeMap<String, String>,
}

impl StaticLocalization {
    /// Create an empty localization table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled English strings.
    pub fn en() -> Self {
        let mut loc = Self::new();
        loc.insert(crate::module::TREASURE_TYPE_LABEL_KEY, "Treasure Table");
        loc.insert(crate::module::TREASURE_TITLE_KEY, "Treasure Table");
        loc
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
}

impl Localization for StaticLocalization {
    fn localize(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_english_strings() {
        let loc = StaticLocalization::en();
        assert_eq!(
            loc.localize(crate::module::TREASURE_TYPE_LABEL_KEY),
            "Treasure Table"
        );
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let loc = StaticLocalization::new();
        assert_eq!(loc.localize("HORT.table.unknown"), "HORT.table.unknown");
    }

    #[test]
    fn insert_overrides() {
        let mut loc = StaticLocalization::en();
        loc.insert(crate::module::TREASURE_TYPE_LABEL_KEY, "Schatztabelle");
        assert_eq!(
            loc.localize(crate::module::TREASURE_TYPE_LABEL_KEY),
            "Schatztabelle"
        );
    }
}

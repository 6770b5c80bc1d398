//! Startup wiring of the treasure subtype into the host registries.

use hort_core::table::TableKind;

use crate::locale::Localization;
use crate::registry::{SheetConfig, SheetRegistry, sheet_class_id};

/// Localization key for the treasure table type label.
pub const TREASURE_TYPE_LABEL_KEY: &str = "HORT.table.treasure.type";

/// Localization key for the treasure sheet title prefix.
pub const TREASURE_TITLE_KEY: &str = "HORT.table.treasure.title";

/// Template rendered by the treasure configuration sheet.
pub const TREASURE_SHEET_TEMPLATE: &str = "templates/treasure-table/treasure-table-config.html";

/// Register the treasure subtype with the host's UI-configuration registry:
/// its configuration sheet and its localized type label.
///
/// Called once at startup, after the host's own registries exist.
pub fn register_module(registry: &mut SheetRegistry, localization: &dyn Localization) {
    let label = localization.localize(TREASURE_TYPE_LABEL_KEY);
    let sheet = SheetConfig {
        id: sheet_class_id(TableKind::Treasure),
        label: label.clone(),
        template: TREASURE_SHEET_TEMPLATE.to_string(),
        classes: vec![
            "sheet".to_string(),
            "roll-table-config".to_string(),
            "treasure-table-config".to_string(),
        ],
        make_default: true,
    };
    registry.register_sheet(TableKind::Treasure.as_str(), sheet, &label);
    tracing::debug!(subtype = TableKind::Treasure.as_str(), "registered treasure table sheet");
}

//! Resolution of entry links against host collections.

use hort_core::collection::{CompendiumSet, TableCollection};
use hort_core::document::{DocumentId, DocumentKind};
use hort_core::entry::EntryKind;
use hort_core::error::HortError;
use hort_core::table::RollTable;

use crate::error::DrawResult;

/// What an entry link resolved to.
#[derive(Debug, Clone)]
pub enum Resolved {
    /// The entry does not link to a table; it passes through a draw unchanged.
    Passthrough,
    /// The entry links to a table that no longer resolves.
    Missing,
    /// The linked table, fetched from its collection.
    Table(Box<RollTable>),
}

/// Resolves linked tables out of the host's document collections.
///
/// Implementations may block while fetching compendium-backed documents;
/// callers of a draw that touches nested tables must tolerate that latency.
/// Fetch failures from a real host propagate unchanged through the error
/// channel; this module never retries.
pub trait TableSource {
    /// Look up a table in the local world collection.
    fn local_table(&self, id: DocumentId) -> Option<RollTable>;

    /// The document kind a named pack holds, if the pack is registered.
    fn pack_kind(&self, pack: &str) -> Option<DocumentKind>;

    /// Fetch a document from a named pack.
    fn pack_table(&self, pack: &str, id: DocumentId) -> DrawResult<Option<RollTable>>;

    /// Classify an entry link for recursive expansion.
    ///
    /// Links to non-table documents, text entries, and links into packs that
    /// are not registered all pass through; a table link whose target is gone
    /// reports [`Resolved::Missing`].
    fn resolve_link(&self, kind: &EntryKind) -> DrawResult<Resolved> {
        match kind {
            EntryKind::Text => Ok(Resolved::Passthrough),
            EntryKind::Document {
                kind: DocumentKind::Table,
                id,
            } => Ok(self
                .local_table(*id)
                .map_or(Resolved::Missing, |table| Resolved::Table(Box::new(table)))),
            EntryKind::Document { .. } => Ok(Resolved::Passthrough),
            EntryKind::Compendium { pack, id } => match self.pack_kind(pack) {
                Some(DocumentKind::Table) => Ok(self
                    .pack_table(pack, *id)?
                    .map_or(Resolved::Missing, |table| Resolved::Table(Box::new(table)))),
                Some(_) => Ok(Resolved::Passthrough),
                None => {
                    tracing::warn!(pack = %pack, "entry links into an unregistered pack");
                    Ok(Resolved::Passthrough)
                }
            },
        }
    }
}

/// [`TableSource`] over the in-memory world collections.
#[derive(Debug, Clone, Copy)]
pub struct WorldSource<'a> {
    tables: &'a TableCollection,
    packs: &'a CompendiumSet,
}

impl<'a> WorldSource<'a> {
    /// Create a source over the given collections.
    pub fn new(tables: &'a TableCollection, packs: &'a CompendiumSet) -> Self {
        Self { tables, packs }
    }
}

impl TableSource for WorldSource<'_> {
    fn local_table(&self, id: DocumentId) -> Option<RollTable> {
        self.tables.get(id).cloned()
    }

    fn pack_kind(&self, pack: &str) -> Option<DocumentKind> {
        self.packs.get(pack).map(hort_core::Compendium::kind)
    }

    fn pack_table(&self, pack: &str, id: DocumentId) -> DrawResult<Option<RollTable>> {
        let pack = self
            .packs
            .get(pack)
            .ok_or_else(|| HortError::PackNotFound(pack.to_string()))?;
        Ok(pack.document(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hort_core::Compendium;

    fn world_with_table() -> (TableCollection, CompendiumSet, DocumentId) {
        let mut tables = TableCollection::new();
        let id = tables.insert(RollTable::new("Gems")).unwrap();
        (tables, CompendiumSet::new(), id)
    }

    #[test]
    fn local_table_link_resolves() {
        let (tables, packs, id) = world_with_table();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Document {
            kind: DocumentKind::Table,
            id,
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Table(_)
        ));
    }

    #[test]
    fn missing_local_table_reported() {
        let (tables, packs, _) = world_with_table();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Document {
            kind: DocumentKind::Table,
            id: DocumentId::new(),
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Missing
        ));
    }

    #[test]
    fn non_table_document_passes_through() {
        let (tables, packs, _) = world_with_table();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Document {
            kind: DocumentKind::Item,
            id: DocumentId::new(),
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Passthrough
        ));
    }

    #[test]
    fn text_passes_through() {
        let (tables, packs, _) = world_with_table();
        let source = WorldSource::new(&tables, &packs);
        assert!(matches!(
            source.resolve_link(&EntryKind::Text).unwrap(),
            Resolved::Passthrough
        ));
    }

    #[test]
    fn pack_table_link_resolves() {
        let inner = RollTable::new("Dragon Hoard");
        let inner_id = inner.id;
        let mut packs = CompendiumSet::new();
        packs.register(Compendium::new(
            "hort.hoards",
            "Treasure Hoards",
            DocumentKind::Table,
            vec![inner],
        ));
        let tables = TableCollection::new();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Compendium {
            pack: "hort.hoards".to_string(),
            id: inner_id,
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Table(_)
        ));
    }

    #[test]
    fn item_pack_link_passes_through() {
        let mut packs = CompendiumSet::new();
        packs.register(Compendium::new(
            "hort.relics",
            "Relics",
            DocumentKind::Item,
            Vec::new(),
        ));
        let tables = TableCollection::new();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Compendium {
            pack: "hort.relics".to_string(),
            id: DocumentId::new(),
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Passthrough
        ));
    }

    #[test]
    fn unregistered_pack_passes_through() {
        let tables = TableCollection::new();
        let packs = CompendiumSet::new();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Compendium {
            pack: "hort.unknown".to_string(),
            id: DocumentId::new(),
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Passthrough
        ));
    }

    #[test]
    fn direct_fetch_from_unregistered_pack_errors() {
        let tables = TableCollection::new();
        let packs = CompendiumSet::new();
        let source = WorldSource::new(&tables, &packs);
        assert!(source.pack_table("hort.unknown", DocumentId::new()).is_err());
    }

    #[test]
    fn stale_pack_entry_reported_missing() {
        let mut packs = CompendiumSet::new();
        packs.register(Compendium::new(
            "hort.hoards",
            "Treasure Hoards",
            DocumentKind::Table,
            Vec::new(),
        ));
        let tables = TableCollection::new();
        let source = WorldSource::new(&tables, &packs);
        let link = EntryKind::Compendium {
            pack: "hort.hoards".to_string(),
            id: DocumentId::new(),
        };
        assert!(matches!(
            source.resolve_link(&link).unwrap(),
            Resolved::Missing
        ));
    }
}

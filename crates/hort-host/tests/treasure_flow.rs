//! End-to-end flow: a treasure table is requested, created, tagged, rolled,
//! and committed, with the engine dispatching on the persisted subtype.

use hort_core::collection::{CompendiumSet, TableCollection};
use hort_core::document::UserId;
use hort_core::entry::TableEntry;
use hort_core::notify::NullNotifier;
use hort_core::table::{RollTable, TableKind};
use hort_draw::{DrawConfig, DrawEngine, WorldSource};
use hort_host::{
    CreateHooks, CreateTableRequest, SheetRegistry, StaticLocalization, TableCreated,
    TypeRegistrar, register_module,
};

#[test]
fn request_tag_roll_and_commit() {
    // Startup: the module registers its subtype with the host registry.
    let mut registry = SheetRegistry::new();
    register_module(&mut registry, &StaticLocalization::en());
    assert!(registry.label_for("treasureTable").is_some());

    // A local user asks for a new treasure table.
    let user = UserId::new();
    let notifier = NullNotifier;
    let mut registrar = TypeRegistrar::new(user, &notifier);
    let request = CreateTableRequest::new("Hoard A", Some(TableKind::Treasure), user);
    registrar.before_create(&request);

    // The host persists the document and notifies the module, which tags it.
    let mut table = RollTable::new("Hoard A").with_entries(vec![
        TableEntry::new("Crown", 100),
        TableEntry::new("Mirage", 0),
    ]);
    let event = TableCreated {
        request_id: request.request_id,
        user,
    };
    registrar.after_create(&mut table, &event).unwrap();
    assert_eq!(table.table_kind(), TableKind::Treasure);

    // A roll from the configuration sheet dispatches on the persisted tag.
    let mut tables = TableCollection::new();
    let id = tables.insert(table).unwrap();
    let packs = CompendiumSet::new();
    let snapshot = tables.get(id).unwrap().clone();
    let draw = {
        let source = WorldSource::new(&tables, &packs);
        let mut engine = DrawEngine::new(&source, &notifier, DrawConfig::default());
        engine.roll(&snapshot, snapshot.table_kind()).unwrap()
    };
    assert_eq!(draw.results.len(), 1);
    assert_eq!(draw.results[0].text, "Crown");
    assert_eq!(draw.rolls.len(), 2);

    // The host's own draw step finalizes the results.
    let drawn: Vec<_> = draw.results.iter().map(|e| e.id).collect();
    let table = tables.get_mut(id).unwrap();
    assert_eq!(table.mark_drawn(&drawn), 1);
    assert!(table.available().iter().all(|e| e.text != "Crown"));
}

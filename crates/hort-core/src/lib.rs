//! Document model for the Hort treasure-table module.
//!
//! Provides the roll-table documents the draw engine operates on: weighted
//! entries with optional links into other tables, namespaced document flags,
//! the local table collection and read-only compendium packs, and the
//! user-notification capability trait injected wherever the host's UI
//! notification service would be called.

pub mod collection;
pub mod document;
pub mod entry;
pub mod error;
pub mod flags;
pub mod notify;
pub mod table;

pub use collection::{Compendium, CompendiumSet, TableCollection};
pub use document::{DocumentId, DocumentKind, UserId};
pub use entry::{EntryId, EntryKind, TableEntry};
pub use error::{HortError, HortResult};
pub use flags::Flags;
pub use notify::{MemoryNotifier, Notifier, NullNotifier};
pub use table::{RollTable, TableKind};

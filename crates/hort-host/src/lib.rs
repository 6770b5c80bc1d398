//! Host integration layer for the Hort treasure-table module.
//!
//! Bridges the host's generic document-creation flow to the treasure subtype:
//! a registrar that remembers the subtype requested at creation time and tags
//! the document once the host confirms creation, a sheet registry that offers
//! the dedicated treasure configuration sheet, and the localization of
//! registry labels.

pub mod error;
pub mod hooks;
pub mod locale;
pub mod module;
pub mod registrar;
pub mod registry;

pub use error::{HostError, HostResult};
pub use hooks::{CreateHooks, CreateTableRequest, RequestId, TableCreated};
pub use locale::{Localization, StaticLocalization};
pub use module::register_module;
pub use registrar::TypeRegistrar;
pub use registry::{SheetConfig, SheetRegistry};

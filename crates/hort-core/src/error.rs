//! Error types for the document model.

use crate::document::DocumentId;
use crate::entry::EntryId;

/// Alias for `Result<T, HortError>`.
pub type HortResult<T> = Result<T, HortError>;

/// Errors that can occur when manipulating the document model.
#[derive(Debug, thiserror::Error)]
pub enum HortError {
    /// The requested table ID does not exist in the collection.
    #[error("table not found: {0}")]
    TableNotFound(DocumentId),

    /// A table with the same name already exists.
    #[error("table already exists: \"{0}\"")]
    DuplicateName(String),

    /// The named compendium pack is not registered.
    #[error("compendium pack not found: {0}")]
    PackNotFound(String),

    /// The requested entry ID does not exist in the table.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),
}

//! Error types for the draw engine.

use hort_core::document::DocumentId;
use hort_core::error::HortError;

/// Alias for `Result<T, DrawError>`.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur while drawing from a table.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// Nested-table expansion exceeded the configured depth limit. The whole
    /// roll is aborted; no partial result is returned.
    #[error("maximum recursion depth ({limit}) exceeded when attempting to draw from table {table}")]
    RecursionLimitExceeded {
        /// The table whose expansion blew the limit.
        table: DocumentId,
        /// The configured depth limit.
        limit: u32,
    },

    /// A lookup against the host collections failed.
    #[error(transparent)]
    Core(#[from] HortError),
}

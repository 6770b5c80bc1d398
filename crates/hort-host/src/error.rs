//! Error types for the host integration layer.

/// Alias for `Result<T, HostError>`.
pub type HostResult<T> = Result<T, HostError>;

/// Errors that can occur while bridging host lifecycle events.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A created document had no matching pending type request. Recoverable:
    /// the document is left untyped rather than guessing.
    #[error("no pending table type for \"{name}\": document bypassed the expected creation path")]
    MissingPendingType {
        /// Name of the document that arrived without a pending request.
        name: String,
    },
}

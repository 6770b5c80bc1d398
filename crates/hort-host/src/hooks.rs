//! The document-creation extension-point contract.
//!
//! The host is expected to invoke a well-defined callback pair around table
//! creation: [`CreateHooks::before_create`] immediately before a new table
//! document is persisted, and [`CreateHooks::after_create`] once it exists.
//! Both payloads carry an explicit creation-request identifier so the two
//! calls can be correlated even when documents share a display name.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hort_core::document::UserId;
use hort_core::table::{RollTable, TableKind};

use crate::error::HostResult;

/// Unique identifier for one document-creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Generate a new random request ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The creation payload the host exposes immediately before persisting a new
/// table document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTableRequest {
    /// Identifier correlating this request with the created document.
    pub request_id: RequestId,
    /// The proposed display name of the document.
    pub name: String,
    /// The subtype present in the creation payload, if any.
    pub table_type: Option<TableKind>,
    /// The user the request originates from.
    pub user: UserId,
}

impl CreateTableRequest {
    /// Build a creation request with a fresh request ID.
    pub fn new(name: impl Into<String>, table_type: Option<TableKind>, user: UserId) -> Self {
        Self {
            request_id: RequestId::new(),
            name: name.into(),
            table_type,
            user,
        }
    }
}

/// The notification the host emits immediately after the document exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableCreated {
    /// The creation request this document came from.
    pub request_id: RequestId,
    /// The user whose request created the document.
    pub user: UserId,
}

/// Callbacks the host invokes around table-document creation.
pub trait CreateHooks {
    /// Called immediately before a new table document is persisted.
    fn before_create(&mut self, request: &CreateTableRequest);

    /// Called once the document exists, with the persisted document available
    /// for tagging.
    fn after_create(&mut self, document: &mut RollTable, event: &TableCreated) -> HostResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn request_carries_subtype() {
        let user = UserId::new();
        let request = CreateTableRequest::new("Hoard A", Some(TableKind::Treasure), user);
        assert_eq!(request.name, "Hoard A");
        assert_eq!(request.table_type, Some(TableKind::Treasure));
        assert_eq!(request.user, user);
    }

    #[test]
    fn request_serde_round_trip() {
        let request =
            CreateTableRequest::new("Hoard A", Some(TableKind::Treasure), UserId::new());
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"treasureTable\""));
        let back: CreateTableRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.request_id, request.request_id);
        assert_eq!(back.table_type, request.table_type);
    }
}

//! The type registrar.
//!
//! The host's creation event does not accept a subtype request directly, so
//! the registrar remembers the subtype asked for at creation time and, once
//! the host confirms creation, persists it as document metadata under two
//! namespaces: the generic sheet-selection scope and the module's own scope.

use std::collections::HashMap;

use serde_json::json;

use hort_core::document::UserId;
use hort_core::flags;
use hort_core::notify::Notifier;
use hort_core::table::{RollTable, TableKind};

use crate::error::{HostError, HostResult};
use crate::hooks::{CreateHooks, CreateTableRequest, RequestId, TableCreated};
use crate::registry::sheet_class_id;

/// Remembers requested table subtypes across the host's two-phase creation
/// flow and tags created documents.
///
/// The pending map is transient, scoped to this registrar's lifetime, and
/// one-shot: an entry is consumed the first time its document arrives.
/// Requests from users other than the local one are ignored so that each
/// collaborating client tags only its own documents.
pub struct TypeRegistrar<'a> {
    local_user: UserId,
    notifier: &'a dyn Notifier,
    pending: HashMap<RequestId, TableKind>,
}

impl<'a> TypeRegistrar<'a> {
    /// Create a registrar acting on behalf of the given local user.
    pub fn new(local_user: UserId, notifier: &'a dyn Notifier) -> Self {
        Self {
            local_user,
            notifier,
            pending: HashMap::new(),
        }
    }

    /// The user this registrar acts for.
    pub fn local_user(&self) -> UserId {
        self.local_user
    }

    /// Number of creation requests awaiting their document.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Record the subtype requested by a creation event, overwriting any
    /// prior entry for the same request.
    ///
    /// Events from other users and events carrying no subtype are ignored.
    pub fn note_pending_type(&mut self, request: &CreateTableRequest) {
        if request.user != self.local_user {
            tracing::debug!(
                request = %request.request_id,
                user = %request.user,
                "ignoring creation request from another user"
            );
            return;
        }
        let Some(kind) = request.table_type else {
            return;
        };
        tracing::debug!(
            request = %request.request_id,
            name = %request.name,
            kind = %kind,
            "noting pending table type"
        );
        self.pending.insert(request.request_id, kind);
    }

    /// Consume the pending entry for a created document and persist its
    /// subtype under both metadata namespaces.
    ///
    /// A document with no matching pending entry bypassed the expected
    /// creation path: the user is warned, the document is left untyped, and
    /// the recoverable [`HostError::MissingPendingType`] is returned.
    pub fn apply_pending_type(
        &mut self,
        document: &mut RollTable,
        event: &TableCreated,
    ) -> HostResult<()> {
        if event.user != self.local_user {
            tracing::debug!(
                request = %event.request_id,
                user = %event.user,
                "ignoring created document from another user"
            );
            return Ok(());
        }
        let Some(kind) = self.pending.remove(&event.request_id) else {
            tracing::warn!(
                table = %document.id,
                name = %document.name,
                "document bypassed the expected creation path, leaving it untyped"
            );
            self.notifier.warn(&format!(
                "Table \"{}\" was created outside the expected flow and was left untyped.",
                document.name
            ));
            return Err(HostError::MissingPendingType {
                name: document.name.clone(),
            });
        };

        document.set_flag(
            flags::CORE_SCOPE,
            flags::SHEET_CLASS_KEY,
            json!(sheet_class_id(kind)),
        );
        document.set_flag(
            flags::MODULE_SCOPE,
            flags::TABLE_TYPE_KEY,
            json!(kind.as_str()),
        );
        Ok(())
    }
}

impl CreateHooks for TypeRegistrar<'_> {
    fn before_create(&mut self, request: &CreateTableRequest) {
        self.note_pending_type(request);
    }

    fn after_create(&mut self, document: &mut RollTable, event: &TableCreated) -> HostResult<()> {
        self.apply_pending_type(document, event)
    }
}

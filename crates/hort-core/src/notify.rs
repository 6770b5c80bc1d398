//! User-notification capability.
//!
//! The host displays notifications in its UI; this module only ever talks to
//! that service through the [`Notifier`] trait so every component stays
//! testable without a live host.

use std::cell::RefCell;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    /// Informational message.
    Info,
    /// Something the user should look at, but the operation continued.
    Warn,
    /// The operation failed.
    Error,
}

/// Displays messages to the requesting user.
pub trait Notifier {
    /// Show an informational message.
    fn info(&self, message: &str);
    /// Show a warning.
    fn warn(&self, message: &str);
    /// Show an error.
    fn error(&self, message: &str);
}

/// A notifier that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// A notifier that records every message, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<(NotifyLevel, String)>>,
}

impl MemoryNotifier {
    /// Create an empty recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded message in display order.
    pub fn messages(&self) -> Vec<(NotifyLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Only the recorded warning texts.
    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == NotifyLevel::Warn)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Notifier for MemoryNotifier {
    fn info(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((NotifyLevel::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((NotifyLevel::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((NotifyLevel::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.info("drawing");
        notifier.warn("nothing to draw");
        notifier.error("roll failed");
        let messages = notifier.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (NotifyLevel::Info, "drawing".to_string()));
        assert_eq!(notifier.warnings(), vec!["nothing to draw".to_string()]);
    }

    #[test]
    fn null_notifier_discards() {
        let notifier = NullNotifier;
        notifier.warn("nothing to draw");
    }
}

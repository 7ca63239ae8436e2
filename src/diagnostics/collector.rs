// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector lives in the application state and is fed directly from
//! `update`, so events land in the buffer in the order they happened.

use std::io::Write;

use chrono::{DateTime, Utc};

use super::{
    sanitize_message, AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, UserAction,
};

/// Central collector for diagnostic events.
///
/// Old events are automatically evicted when the buffer reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Echo each event to stderr as a JSON line.
    verbose: bool,
    /// When collection started (wall clock).
    started_at: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), false)
    }
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity, verbose: bool) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            verbose,
            started_at: Utc::now(),
        }
    }

    /// Logs a user action event.
    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.record(DiagnosticEventKind::UserAction { action, details });
    }

    /// Logs an operation event with its duration.
    pub fn log_operation(&mut self, operation: AppOperation) {
        self.record(DiagnosticEventKind::Operation { operation });
    }

    /// Logs a warning. The message is sanitized first.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        let message = sanitize_message(&message.into());
        self.record(DiagnosticEventKind::Warning { message });
    }

    /// Logs an error. The message is sanitized first.
    pub fn log_error(&mut self, message: impl Into<String>) {
        let message = sanitize_message(&message.into());
        self.record(DiagnosticEventKind::Error { message });
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        let event = DiagnosticEvent::new(kind);
        if self.verbose {
            echo(&event);
        }
        self.buffer.push(event);
    }

    /// Returns an iterator over stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.buffer.latest()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

fn echo(event: &DiagnosticEvent) {
    match serde_json::to_string(event) {
        Ok(line) => {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
        Err(e) => eprintln!("[diagnostics] failed to serialize event: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::newtypes::buffer_capacity_bounds;

    #[test]
    fn events_are_stored_in_order() {
        let mut collector = DiagnosticsCollector::default();

        collector.log_action(UserAction::SearchSubmitted);
        collector.log_operation(AppOperation::LookupCompleted {
            outcome: "found".to_string(),
            duration_ms: 12,
        });

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(
            kinds[0],
            DiagnosticEventKind::UserAction {
                action: UserAction::SearchSubmitted,
                ..
            }
        ));
        assert!(matches!(kinds[1], DiagnosticEventKind::Operation { .. }));
    }

    #[test]
    fn buffer_is_bounded() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0), false);

        for _ in 0..(buffer_capacity_bounds::MIN + 10) {
            collector.log_action(UserAction::QueryEdited);
        }

        assert_eq!(collector.len(), buffer_capacity_bounds::MIN);
    }

    #[test]
    fn warnings_and_errors_are_sanitized() {
        let mut collector = DiagnosticsCollector::default();

        collector.log_error("GET /?apikey=secret&t=Alien failed");

        match &collector.latest().expect("event recorded").kind {
            DiagnosticEventKind::Error { message } => {
                assert!(!message.contains("secret"));
                assert!(message.contains("<redacted>"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn verbose_collector_still_buffers() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default(), true);
        collector.log_warning("config file unreadable");

        assert!(collector.is_verbose());
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::LinkCopied);

        collector.clear();

        assert!(collector.is_empty());
        assert!(collector.started_at() <= Utc::now());
    }
}

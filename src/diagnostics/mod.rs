// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording application activity.
//!
//! Events captured during a session are stored in a memory-bounded circular
//! buffer. With `--verbose` each event is also echoed to stderr as one JSON
//! line.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event wrapping a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and the verbose echo
//!
//! # Privacy
//!
//! Warning and error messages pass through [`sanitize_message`], which
//! redacts API keys that may appear in request URLs.

mod buffer;
mod collector;
mod events;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{AppOperation, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use sanitizer::sanitize_message;

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Submit a title search.
    SearchSubmitted,

    /// Edit the search query.
    QueryEdited,

    /// Add the previewed movie to the list.
    MovieAdded {
        imdb_id: String,
    },

    /// Add rejected because the movie is already listed.
    DuplicateRejected {
        imdb_id: String,
    },

    /// Copy a movie's IMDb link to the clipboard.
    LinkCopied,

    /// Switch the UI language.
    LanguageChanged {
        locale: String,
    },
}

/// Operations with timing information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// A title lookup resolved.
    LookupCompleted {
        /// `found`, `not_found` or `failed`.
        outcome: String,
        duration_ms: u64,
    },

    /// A poster download finished.
    PosterFetched {
        success: bool,
        duration_ms: u64,
    },
}

/// A diagnostic event with a wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event occurred (UTC).
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        /// Optional additional details.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Completed operation with duration.
    Operation { operation: AppOperation },

    /// Non-critical warning.
    Warning { message: String },

    /// Operation failure.
    Error { message: String },
}

// SPDX-License-Identifier: MPL-2.0
//! Movie lookup port definition.
//!
//! This module defines the [`MovieLookup`] trait the finder uses to resolve a
//! title, together with the raw record it returns and the explicit outcome
//! type. "Not found" is a regular [`LookupOutcome`] variant rather than an
//! error so callers handle it as a normal, recoverable result.

use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::fmt;

// =============================================================================
// RawMovie
// =============================================================================

/// A movie record as returned by the lookup service, before normalization.
///
/// Field names follow the OMDb payload (`Title`, `Plot`, `Poster`, `imdbID`).
/// Every field defaults to an empty string so partial payloads still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawMovie {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Plot", default)]
    pub plot: String,

    /// Poster URL, or the literal `"N/A"` when the service has none.
    #[serde(rename = "Poster", default)]
    pub poster: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

// =============================================================================
// LookupError
// =============================================================================

/// Reasons a lookup could not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No API key is configured; no request was sent.
    MissingApiKey,

    /// The request could not be sent or the connection failed.
    Http(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The service answered but reported an error (e.g. an invalid key).
    Api(String),

    /// The response body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingApiKey => write!(f, "no lookup API key configured"),
            LookupError::Http(msg) => write!(f, "request failed: {msg}"),
            LookupError::Status(code) => write!(f, "HTTP status: {code}"),
            LookupError::Api(msg) => write!(f, "service error: {msg}"),
            LookupError::Parse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

// =============================================================================
// LookupOutcome
// =============================================================================

/// Resolution of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(RawMovie),
    NotFound,
    Failed(LookupError),
}

impl LookupOutcome {
    /// Short label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::Failed(_) => "failed",
        }
    }
}

// =============================================================================
// MovieLookup Trait
// =============================================================================

/// Resolves a movie title against a remote database.
///
/// The title is passed already trimmed. Implementations must not panic and
/// must map every failure into [`LookupOutcome::Failed`].
///
/// # Example
///
/// ```ignore
/// use movie_finder::application::port::{LookupOutcome, MovieLookup};
///
/// async fn exists(lookup: &dyn MovieLookup, title: &str) -> bool {
///     matches!(lookup.lookup(title.to_string()).await, LookupOutcome::Found(_))
/// }
/// ```
pub trait MovieLookup: Send + Sync {
    /// Looks up a single movie by exact title.
    fn lookup(&self, title: String) -> BoxFuture<'static, LookupOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn raw_movie_parses_omdb_field_names() {
        let json = r#"{
            "Title": "Forrest Gump",
            "Plot": "The history of the United States from the 1950s to the '70s.",
            "Poster": "https://m.media-amazon.com/images/M/forrest.jpg",
            "imdbID": "tt0109830",
            "Year": "1994",
            "Response": "True"
        }"#;

        let raw: RawMovie = serde_json::from_str(json).expect("valid OMDb payload");

        assert_eq!(raw.title, "Forrest Gump");
        assert_eq!(raw.imdb_id, "tt0109830");
        assert!(raw.poster.ends_with("forrest.jpg"));
    }

    #[test]
    fn raw_movie_tolerates_missing_fields() {
        let raw: RawMovie = serde_json::from_str(r#"{"Title": "Short"}"#).expect("partial payload");
        assert_eq!(raw.title, "Short");
        assert!(raw.plot.is_empty());
        assert!(raw.poster.is_empty());
    }

    #[test]
    fn lookup_error_display() {
        assert_eq!(LookupError::Status(503).to_string(), "HTTP status: 503");
        assert!(LookupError::Api("Invalid API key!".into())
            .to_string()
            .contains("Invalid API key!"));
    }

    #[test]
    fn outcome_labels_are_distinct() {
        let labels = [
            LookupOutcome::Found(RawMovie::default()).label(),
            LookupOutcome::NotFound.label(),
            LookupOutcome::Failed(LookupError::MissingApiKey).label(),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }

    struct EchoLookup;

    impl MovieLookup for EchoLookup {
        fn lookup(&self, title: String) -> BoxFuture<'static, LookupOutcome> {
            async move {
                if title.is_empty() {
                    LookupOutcome::NotFound
                } else {
                    LookupOutcome::Found(RawMovie {
                        title,
                        ..RawMovie::default()
                    })
                }
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn trait_objects_resolve_outcomes() {
        let lookup: Box<dyn MovieLookup> = Box::new(EchoLookup);

        match lookup.lookup("Alien".to_string()).await {
            LookupOutcome::Found(raw) => assert_eq!(raw.title, "Alien"),
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(lookup.lookup(String::new()).await, LookupOutcome::NotFound);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and pure use-case logic.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`normalize`]: Maps raw lookup records onto the canonical [`Movie`](crate::domain::Movie)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`, `app`) holds ports behind `Arc<dyn _>`
//!
//! # Example
//!
//! ```ignore
//! use movie_finder::application::{normalize, port::{LookupOutcome, MovieLookup}};
//!
//! async fn find(lookup: &dyn MovieLookup, title: &str) -> Option<Movie> {
//!     match lookup.lookup(title.trim().to_string()).await {
//!         LookupOutcome::Found(raw) => Some(normalize::normalize(raw)),
//!         _ => None,
//!     }
//! }
//! ```

pub mod normalize;
pub mod port;

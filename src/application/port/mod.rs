// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`lookup`]: Title lookup against a remote movie database
//! - [`poster`]: Poster image download
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so they can be shared as `Arc<dyn _>`
//! - Methods return `'static` boxed futures, which Iced's `Task::perform`
//!   can drive without borrowing application state
//! - Failures are values (`LookupOutcome::Failed`, `PosterError`), never panics

pub mod lookup;
pub mod poster;

pub use lookup::{LookupError, LookupOutcome, MovieLookup, RawMovie};
pub use poster::{PosterError, PosterFetcher};

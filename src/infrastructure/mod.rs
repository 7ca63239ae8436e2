// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the network stack (`reqwest`).
//!
//! # Available Adapters
//!
//! - [`omdb`]: Title lookup against the OMDb API (implements [`MovieLookup`])
//! - [`poster`]: Poster download over HTTP (implements [`PosterFetcher`])
//! - [`http`]: Shared HTTP client construction
//!
//! [`MovieLookup`]: crate::application::port::MovieLookup
//! [`PosterFetcher`]: crate::application::port::PosterFetcher

pub mod http;
pub mod omdb;
pub mod poster;

pub use omdb::OmdbClient;
pub use poster::HttpPosterFetcher;

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so it can be tested in
//! isolation from the UI and the network.
//!
//! # Modules
//!
//! - [`movie`]: The canonical [`Movie`](movie::Movie) record and the movie list rules
//! - [`newtypes`]: Range-checked settings ([`LookupTimeout`](newtypes::LookupTimeout),
//!   [`PosterCacheCapacity`](newtypes::PosterCacheCapacity),
//!   [`BufferCapacity`](newtypes::BufferCapacity))

pub mod movie;
pub mod newtypes;

pub use movie::{AddOutcome, Movie, MovieList};
pub use newtypes::{BufferCapacity, LookupTimeout, PosterCacheCapacity};

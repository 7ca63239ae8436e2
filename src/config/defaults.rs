// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Lookup**: Remote movie database endpoint and timeout
//! - **Posters**: In-memory poster cache size
//! - **Diagnostics**: Event buffer size

use crate::domain::newtypes::{buffer_capacity_bounds, lookup_timeout_bounds, poster_cache_bounds};

// ==========================================================================
// Lookup Defaults
// ==========================================================================

/// Default lookup endpoint.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = crate::infrastructure::omdb::DEFAULT_ENDPOINT;

/// Default lookup request timeout (in seconds).
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = lookup_timeout_bounds::DEFAULT;

/// Environment variable that supplies the lookup API key.
pub const ENV_API_KEY: &str = "OMDB_API_KEY";

// ==========================================================================
// Poster Defaults
// ==========================================================================

/// Default number of posters kept in memory.
pub const DEFAULT_POSTER_CACHE_CAPACITY: usize = poster_cache_bounds::DEFAULT;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

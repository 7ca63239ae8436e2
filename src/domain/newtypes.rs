// SPDX-License-Identifier: MPL-2.0
//! Range-checked value types for user-tunable settings.
//!
//! Each newtype clamps on construction so values read from a hand-edited
//! `settings.toml` can never put the application in a nonsensical state.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Lookup request timeout bounds, in seconds.
pub mod lookup_timeout_bounds {
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 60;
    pub const DEFAULT: u64 = 10;
}

/// Poster cache capacity bounds, in entries.
pub mod poster_cache_bounds {
    pub const MIN: usize = 8;
    pub const MAX: usize = 512;
    pub const DEFAULT: usize = 64;
}

/// Diagnostics buffer capacity bounds, in events.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10000;
    pub const DEFAULT: usize = 1000;
}

// =============================================================================
// LookupTimeout
// =============================================================================

/// Timeout applied to a single lookup request (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTimeout(u64);

impl LookupTimeout {
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(lookup_timeout_bounds::MIN, lookup_timeout_bounds::MAX))
    }

    #[must_use]
    pub fn secs(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for LookupTimeout {
    fn default() -> Self {
        Self(lookup_timeout_bounds::DEFAULT)
    }
}

// =============================================================================
// PosterCacheCapacity
// =============================================================================

/// Number of decoded posters kept in memory (8–512).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterCacheCapacity(usize);

impl PosterCacheCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(poster_cache_bounds::MIN, poster_cache_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PosterCacheCapacity {
    fn default() -> Self {
        Self(poster_cache_bounds::DEFAULT)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Capacity of the diagnostics event buffer (100–10000 events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_timeout_clamps() {
        assert_eq!(LookupTimeout::from_secs(0).secs(), lookup_timeout_bounds::MIN);
        assert_eq!(LookupTimeout::from_secs(600).secs(), lookup_timeout_bounds::MAX);
        assert_eq!(LookupTimeout::from_secs(15).secs(), 15);
    }

    #[test]
    fn lookup_timeout_default_converts_to_duration() {
        assert_eq!(
            LookupTimeout::default().as_duration(),
            Duration::from_secs(lookup_timeout_bounds::DEFAULT)
        );
    }

    #[test]
    fn poster_cache_capacity_clamps() {
        assert_eq!(PosterCacheCapacity::new(0).value(), poster_cache_bounds::MIN);
        assert_eq!(PosterCacheCapacity::new(10_000).value(), poster_cache_bounds::MAX);
        assert_eq!(PosterCacheCapacity::new(32).value(), 32);
    }

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(BufferCapacity::default().value(), buffer_capacity_bounds::DEFAULT);
    }
}

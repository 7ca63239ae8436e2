// SPDX-License-Identifier: MPL-2.0
//! Normalizer from raw lookup records to the canonical [`Movie`].

use crate::application::port::RawMovie;
use crate::domain::Movie;

/// Poster shown when the lookup service has no image for a movie.
pub const DEFAULT_POSTER_URL: &str = "https://via.placeholder.com/360x270.png?text=no%20preview";

/// Base of the public IMDb title page; the IMDb id is appended.
pub const IMDB_TITLE_BASE_URL: &str = "https://www.imdb.com/title/";

/// Value the lookup service uses for "no data" in string fields.
const NOT_AVAILABLE: &str = "N/A";

/// Maps a raw lookup record onto the canonical movie shape.
///
/// Pure and total: any record that the lookup reported as found produces a
/// movie. A missing poster becomes [`DEFAULT_POSTER_URL`]; a missing plot
/// becomes an empty description.
#[must_use]
pub fn normalize(raw: RawMovie) -> Movie {
    let img_url = if is_available(&raw.poster) {
        raw.poster
    } else {
        DEFAULT_POSTER_URL.to_string()
    };

    let description = if is_available(&raw.plot) {
        raw.plot
    } else {
        String::new()
    };

    Movie {
        title: raw.title,
        description,
        img_url,
        imdb_url: format!("{IMDB_TITLE_BASE_URL}{}", raw.imdb_id),
        imdb_id: raw.imdb_id,
    }
}

fn is_available(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != NOT_AVAILABLE
}

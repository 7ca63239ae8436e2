// SPDX-License-Identifier: MPL-2.0
//! Canonical movie record and the list it is collected into.
//!
//! These types carry no presentation or transport concerns. The lookup
//! adapter produces raw records, the normalizer turns them into [`Movie`],
//! and the UI only ever renders [`Movie`].

/// A movie in the shape the preview card and the list render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub description: String,
    /// Poster URL. Never empty: missing posters use a placeholder URL.
    pub img_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

/// Result of appending a movie to a [`MovieList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A movie with the same IMDb id is already present; the list is unchanged.
    Duplicate,
}

/// Ordered list of movies the user has added, unique by IMDb id.
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: Vec<Movie>,
}

impl MovieList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `movie` unless a movie with the same IMDb id is already listed.
    pub fn add(&mut self, movie: Movie) -> AddOutcome {
        if self.contains(&movie.imdb_id) {
            return AddOutcome::Duplicate;
        }
        self.movies.push(movie);
        AddOutcome::Added
    }

    #[must_use]
    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

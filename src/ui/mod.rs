// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, a `view`, and reports to the parent through an
//! `Effect` or `Event` value.
//!
//! # Components
//!
//! - [`find_movie`] - Title search, preview and add-to-list
//! - [`movie_card`] - Card for a single movie, plus the poster cache
//! - [`movies_list`] - The user's collected movies
//! - [`header`] - Window title and language picker
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod find_movie;
pub mod header;
pub mod movie_card;
pub mod movies_list;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;

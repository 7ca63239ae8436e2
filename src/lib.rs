// SPDX-License-Identifier: MPL-2.0
//! `movie_finder` is a small movie search widget built with the Iced GUI framework.
//!
//! Type a title, preview the matching movie from OMDb, and collect it into a
//! list. The UI is localized with Fluent and user preferences live in a TOML
//! settings file.

#![doc(html_root_url = "https://docs.rs/movie_finder/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::PosterError;
use crate::ui::find_movie;
use crate::ui::header;
use crate::ui::movies_list;
use crate::ui::notifications;
use std::time::{Duration, Instant};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    FindMovie(find_movie::Message),
    MoviesList(movies_list::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// A poster download finished.
    PosterLoaded {
        url: String,
        result: Result<Vec<u8>, PosterError>,
        elapsed: Duration,
    },
    /// Periodic tick for the spinner and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Lookup API key; takes precedence over `OMDB_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MOVIE_FINDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Echo diagnostic events to stderr.
    pub verbose: bool,
}

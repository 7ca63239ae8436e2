// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the finder, the movie
//! list and the header.
//!
//! The `App` struct owns everything the components share (the query, the
//! list, the poster cache) and translates component effects into side
//! effects like lookups, poster downloads, clipboard writes and config
//! persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{MovieLookup, PosterFetcher};
use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::MovieList;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpPosterFetcher, OmdbClient};
use crate::ui::find_movie;
use crate::ui::movie_card::PosterCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Current contents of the title input.
    query: String,
    movies: MovieList,
    find_movie: find_movie::State,
    posters: PosterCache,
    poster_fetcher: Arc<dyn PosterFetcher>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    theme_mode: ThemeMode,
    /// Where settings.toml lives. `None` uses the resolved default location.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.query)
            .field("movies", &self.movies.len())
            .field("phase", self.find_movie.phase())
            .finish_non_exhaustive()
    }
}

/// External services the application talks to.
pub struct Services {
    pub lookup: Arc<dyn MovieLookup>,
    pub posters: Arc<dyn PosterFetcher>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and wires the HTTP adapters.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());

        let api_key = config::resolve_api_key(flags.api_key.clone(), &config);
        let lookup = OmdbClient::new(api_key, config.lookup.endpoint(), config.lookup.timeout());
        let has_api_key = lookup.has_api_key();
        let services = Services {
            lookup: Arc::new(lookup),
            posters: Arc::new(HttpPosterFetcher::new(config.lookup.timeout())),
        };

        let mut app = Self::with_services(flags.lang, flags.verbose, &config, services, config_dir);

        if config_warning.is_some() {
            app.notifications
                .raise(Notification::config_load_failed(), &mut app.diagnostics);
        }
        if !has_api_key {
            app.notifications
                .raise(Notification::missing_api_key(), &mut app.diagnostics);
        }

        (app, Task::none())
    }

    /// Builds the application around the given services.
    ///
    /// `config_dir` is where language changes are saved.
    #[must_use]
    pub fn with_services(
        lang: Option<String>,
        verbose: bool,
        config: &Config,
        services: Services,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            query: String::new(),
            movies: MovieList::new(),
            find_movie: find_movie::State::new(services.lookup),
            posters: PosterCache::new(config.posters.capacity()),
            poster_fetcher: services.posters,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::new(BufferCapacity::default(), verbose),
            theme_mode: config.general.theme_mode,
            config_dir,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn movies(&self) -> &MovieList {
        &self.movies
    }

    #[must_use]
    pub fn find_movie(&self) -> &find_movie::State {
        &self.find_movie
    }

    #[must_use]
    pub fn posters(&self) -> &PosterCache {
        &self.posters
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.find_movie.is_loading(),
            !self.notifications.is_empty(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            query: &mut self.query,
            movies: &mut self.movies,
            find_movie: &mut self.find_movie,
            posters: &mut self.posters,
            poster_fetcher: &self.poster_fetcher,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            config_dir: &self.config_dir,
        };

        match message {
            Message::FindMovie(finder_message) => {
                update::handle_find_movie_message(&mut ctx, finder_message)
            }
            Message::MoviesList(list_message) => {
                update::handle_movies_list_message(&mut ctx, list_message)
            }
            Message::Header(header_message) => update::handle_header_message(&mut ctx, header_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::PosterLoaded {
                url,
                result,
                elapsed,
            } => update::handle_poster_loaded(&mut ctx, url, result, elapsed),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            query: &self.query,
            find_movie: &self.find_movie,
            movies: &self.movies,
            posters: &self.posters,
            notifications: &self.notifications,
        })
    }
}

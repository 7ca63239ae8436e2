// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what they need through effects and events; the
//! handlers here apply them to the shared state (query, movie list, poster
//! cache), raise notifications and record diagnostics.

use super::{persistence, Message};
use crate::application::port::{LookupOutcome, PosterError, PosterFetcher};
use crate::diagnostics::{AppOperation, DiagnosticsCollector, UserAction};
use crate::domain::{AddOutcome, Movie, MovieList};
use crate::i18n::fluent::I18n;
use crate::ui::find_movie::{self, Effect as FindMovieEffect};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::movie_card::PosterCache;
use crate::ui::movies_list;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub query: &'a mut String,
    pub movies: &'a mut MovieList,
    pub find_movie: &'a mut find_movie::State,
    pub posters: &'a mut PosterCache,
    pub poster_fetcher: &'a Arc<dyn PosterFetcher>,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub config_dir: &'a Option<PathBuf>,
}

/// Handles find-movie component messages.
pub fn handle_find_movie_message(
    ctx: &mut UpdateContext<'_>,
    message: find_movie::Message,
) -> Task<Message> {
    let mut poster_task = Task::none();

    match &message {
        find_movie::Message::Submit if find_movie::can_submit(ctx.query.as_str()) => {
            ctx.diagnostics.log_action_with_details(
                UserAction::SearchSubmitted,
                Some(ctx.query.trim().to_string()),
            );
        }
        find_movie::Message::QueryEdited(_) => {
            ctx.diagnostics.log_action(UserAction::QueryEdited);
        }
        find_movie::Message::LookupResolved(resolution) => {
            ctx.diagnostics.log_operation(AppOperation::LookupCompleted {
                outcome: resolution.outcome.label().to_string(),
                duration_ms: millis(resolution.elapsed),
            });
            if let LookupOutcome::Failed(error) = &resolution.outcome {
                ctx.diagnostics.log_error(error.to_string());
            }
        }
        _ => {}
    }

    let is_resolution = matches!(message, find_movie::Message::LookupResolved(_));
    let (effect, task) = ctx.find_movie.handle_message(message, ctx.query.as_str());

    if is_resolution {
        if let Some(movie) = ctx.find_movie.candidate() {
            let url = movie.img_url.clone();
            poster_task = request_poster(ctx.posters, ctx.poster_fetcher, url);
        }
    }

    let effect_task = apply_find_movie_effect(ctx, effect);

    Task::batch([task.map(Message::FindMovie), poster_task, effect_task])
}

fn apply_find_movie_effect(ctx: &mut UpdateContext<'_>, effect: FindMovieEffect) -> Task<Message> {
    match effect {
        FindMovieEffect::None => Task::none(),
        FindMovieEffect::QueryChanged(value) => {
            *ctx.query = value;
            Task::none()
        }
        FindMovieEffect::AddMovie(movie) => add_movie(ctx, movie),
        FindMovieEffect::CopyLink(url) => copy_link(ctx, url),
    }
}

/// Handles messages from the movie list.
pub fn handle_movies_list_message(
    ctx: &mut UpdateContext<'_>,
    message: movies_list::Message,
) -> Task<Message> {
    match message {
        movies_list::Message::CopyLink(url) => copy_link(ctx, url),
    }
}

/// Appends `movie` to the list, or warns when it is already listed.
fn add_movie(ctx: &mut UpdateContext<'_>, movie: Movie) -> Task<Message> {
    let title = movie.title.clone();
    let imdb_id = movie.imdb_id.clone();
    let poster_url = movie.img_url.clone();

    match ctx.movies.add(movie) {
        AddOutcome::Added => {
            ctx.diagnostics.log_action(UserAction::MovieAdded { imdb_id });
            ctx.notifications
                .raise(Notification::movie_added(title), ctx.diagnostics);
            request_poster(ctx.posters, ctx.poster_fetcher, poster_url)
        }
        AddOutcome::Duplicate => {
            ctx.diagnostics
                .log_action(UserAction::DuplicateRejected { imdb_id });
            ctx.notifications
                .raise(Notification::movie_duplicate(title), ctx.diagnostics);
            Task::none()
        }
    }
}

fn copy_link(ctx: &mut UpdateContext<'_>, url: String) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::LinkCopied);
    ctx.notifications
        .raise(Notification::link_copied(), ctx.diagnostics);
    iced::clipboard::write(url)
}

/// Starts a poster download unless the cache already knows `url`.
pub fn request_poster(
    posters: &mut PosterCache,
    fetcher: &Arc<dyn PosterFetcher>,
    url: String,
) -> Task<Message> {
    if !posters.request(&url) {
        return Task::none();
    }

    let started = Instant::now();
    let pending = fetcher.fetch(url.clone());
    Task::perform(
        async move {
            let result = pending.await;
            (url, result, started.elapsed())
        },
        |(url, result, elapsed)| Message::PosterLoaded {
            url,
            result,
            elapsed,
        },
    )
}

/// Stores a finished poster download in the cache.
pub fn handle_poster_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, PosterError>,
    elapsed: Duration,
) -> Task<Message> {
    ctx.diagnostics.log_operation(AppOperation::PosterFetched {
        success: result.is_ok(),
        duration_ms: millis(elapsed),
    });

    match result {
        Ok(bytes) => ctx.posters.store(url, bytes),
        Err(error) => {
            ctx.diagnostics.log_warning(format!("{error} ({url})"));
            ctx.posters.mark_unavailable(url);
        }
    }
    Task::none()
}

/// Handles header messages (language selection).
pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.i18n.current_locale()) {
        HeaderEvent::None => {}
        HeaderEvent::LanguageChanged(locale) => {
            ctx.diagnostics.log_action(UserAction::LanguageChanged {
                locale: locale.to_string(),
            });
            if let Err(error) =
                persistence::apply_language_change(ctx.i18n, locale, ctx.config_dir.clone())
            {
                ctx.diagnostics.log_error(error.to_string());
                ctx.notifications
                    .raise(Notification::config_save_failed(), ctx.diagnostics);
            }
        }
    }
    Task::none()
}

/// Advances the spinner and expires toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.expire(now);
    if ctx.find_movie.is_loading() {
        let (_, task) = ctx
            .find_movie
            .handle_message(find_movie::Message::SpinnerTick, ctx.query.as_str());
        return task.map(Message::FindMovie);
    }
    Task::none()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(42)), 42);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}

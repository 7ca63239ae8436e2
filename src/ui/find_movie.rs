// SPDX-License-Identifier: MPL-2.0
//! Movie finder: search a title, preview the match, add it to the list.
//!
//! The component follows a small state machine:
//!
//! ```text
//! Idle ──submit──▶ Searching ──found──▶ Previewing(movie) ──add──▶ Idle
//!                      │
//!                      └──not found / failed──▶ NotFound ──edit──▶ Idle
//! ```
//!
//! The query text is owned by the parent. It is passed in for every update
//! and view, and changed only through [`Effect::QueryChanged`]. Every
//! resolved lookup clears it, whatever the outcome.
//!
//! Overlapping searches are not coordinated: each resolution is applied in
//! arrival order, so the last one to resolve wins.

use crate::application::normalize::normalize;
use crate::application::port::{LookupOutcome, MovieLookup};
use crate::domain::Movie;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::movie_card::{self, PosterCache};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{button, text, text_input, Column, Row, Text};
use iced::{alignment, Element, Length, Task, Theme};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Where the finder currently is in the search flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    /// A match is shown and can be added.
    Previewing(Movie),
    /// The last search produced no movie.
    NotFound,
}

/// A completed lookup together with how long it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: LookupOutcome,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The text input changed.
    QueryEdited(String),
    /// Search button pressed or Enter typed.
    Submit,
    LookupResolved(Resolution),
    /// "Add to list" pressed on the preview.
    AddToList,
    /// "Copy link" pressed on the preview card.
    CopyLink(String),
    SpinnerTick,
}

/// Requests for the parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Replace the parent's query with this value.
    QueryChanged(String),
    /// Append this movie to the parent's list.
    AddMovie(Movie),
    /// Put this URL on the clipboard.
    CopyLink(String),
}

/// Which parts of the finder are rendered, derived from state and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub submit_enabled: bool,
    pub spinner: bool,
    pub error: bool,
    pub preview: bool,
    pub add_button: bool,
}

pub struct State {
    phase: Phase,
    lookup: Arc<dyn MovieLookup>,
    spinner_rotation: f32,
    searching_since: Option<Instant>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("spinner_rotation", &self.spinner_rotation)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self {
            phase: Phase::Idle,
            lookup,
            spinner_rotation: 0.0,
            searching_since: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The previewed movie, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&Movie> {
        match &self.phase {
            Phase::Previewing(movie) => Some(movie),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Searching)
    }

    #[must_use]
    pub fn search_failed(&self) -> bool {
        matches!(self.phase, Phase::NotFound)
    }

    /// How long the current search has been running.
    #[must_use]
    pub fn searching_for(&self) -> Option<Duration> {
        self.searching_since.map(|started| started.elapsed())
    }

    #[must_use]
    pub fn visibility(&self, query: &str) -> Visibility {
        let has_candidate = self.candidate().is_some();
        Visibility {
            submit_enabled: can_submit(query),
            spinner: self.is_loading(),
            error: self.search_failed(),
            preview: has_candidate,
            add_button: has_candidate,
        }
    }

    pub fn handle_message(&mut self, message: Message, query: &str) -> (Effect, Task<Message>) {
        match message {
            Message::QueryEdited(value) => {
                if self.search_failed() {
                    self.phase = Phase::Idle;
                }
                (Effect::QueryChanged(value), Task::none())
            }
            Message::Submit => {
                if !can_submit(query) {
                    return (Effect::None, Task::none());
                }
                self.phase = Phase::Searching;
                self.searching_since = Some(Instant::now());
                (Effect::None, self.start_lookup(query.trim().to_string()))
            }
            Message::LookupResolved(resolution) => {
                self.searching_since = None;
                self.spinner_rotation = 0.0;
                self.phase = match resolution.outcome {
                    LookupOutcome::Found(raw) => Phase::Previewing(normalize(raw)),
                    LookupOutcome::NotFound | LookupOutcome::Failed(_) => Phase::NotFound,
                };
                (Effect::QueryChanged(String::new()), Task::none())
            }
            Message::AddToList => match std::mem::take(&mut self.phase) {
                Phase::Previewing(movie) => (Effect::AddMovie(movie), Task::none()),
                other => {
                    self.phase = other;
                    (Effect::None, Task::none())
                }
            },
            Message::CopyLink(url) => (Effect::CopyLink(url), Task::none()),
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn start_lookup(&self, title: String) -> Task<Message> {
        let started = Instant::now();
        let pending = self.lookup.lookup(title);
        Task::perform(
            async move {
                let outcome = pending.await;
                Resolution {
                    outcome,
                    elapsed: started.elapsed(),
                }
            },
            Message::LookupResolved,
        )
    }
}

/// Submitting requires at least one non-whitespace character.
#[must_use]
pub fn can_submit(query: &str) -> bool {
    !query.trim().is_empty()
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render the finder.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    pub posters: &'a PosterCache,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let visibility = state.visibility(ctx.query);

    let input = text_input(&ctx.i18n.tr("find-movie-placeholder"), ctx.query)
        .on_input(Message::QueryEdited)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let submit_label: Element<'a, Message> = if visibility.spinner {
        let color = iced::Color::WHITE;
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(AnimatedSpinner::new(color, state.spinner_rotation, sizing::SPINNER).into_element())
            .push(Text::new(ctx.i18n.tr("find-movie-search-button")))
            .into()
    } else {
        Text::new(ctx.i18n.tr("find-movie-search-button")).into()
    };

    let submit = button(submit_label)
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(visibility.submit_enabled.then_some(Message::Submit));

    let search_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("find-movie-title-label")).size(typography::BODY))
        .push(search_row);

    if visibility.error {
        content = content.push(
            Text::new(ctx.i18n.tr("find-movie-error-not-found"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().danger),
                }),
        );
    }

    if let Some(movie) = state.candidate() {
        let card_ctx = movie_card::ViewContext {
            i18n: ctx.i18n,
            posters: ctx.posters,
        };
        content = content
            .push(Text::new(ctx.i18n.tr("preview-title")).size(typography::TITLE_MD))
            .push(movie_card::view(
                &card_ctx,
                movie,
                Message::CopyLink(movie.imdb_url.clone()),
            ))
            .push(
                button(Text::new(ctx.i18n.tr("find-movie-add-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::AddToList),
            );
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{LookupError, RawMovie};
    use futures_util::future::{self, BoxFuture};
    use futures_util::FutureExt;
    use std::sync::Mutex;

    /// Records every title it is asked for and answers `NotFound`.
    #[derive(Default)]
    struct RecordingLookup {
        titles: Mutex<Vec<String>>,
    }

    impl MovieLookup for RecordingLookup {
        fn lookup(&self, title: String) -> BoxFuture<'static, LookupOutcome> {
            if let Ok(mut titles) = self.titles.lock() {
                titles.push(title);
            }
            future::ready(LookupOutcome::NotFound).boxed()
        }
    }

    fn forrest_gump() -> RawMovie {
        RawMovie {
            title: "Forrest Gump".to_string(),
            plot: "Stupid is as stupid does.".to_string(),
            poster: "https://img/fg.jpg".to_string(),
            imdb_id: "tt0109830".to_string(),
        }
    }

    fn resolved(outcome: LookupOutcome) -> Message {
        Message::LookupResolved(Resolution {
            outcome,
            elapsed: Duration::from_millis(5),
        })
    }

    fn finder() -> (State, Arc<RecordingLookup>) {
        let lookup = Arc::new(RecordingLookup::default());
        (State::new(lookup.clone()), lookup)
    }

    fn recorded(lookup: &RecordingLookup) -> Vec<String> {
        lookup.titles.lock().expect("lock").clone()
    }

    #[test]
    fn submit_is_impossible_for_blank_queries() {
        let (mut state, lookup) = finder();

        for query in ["", " ", "\t", "  \n  "] {
            assert!(!state.visibility(query).submit_enabled, "query {query:?}");
            let (effect, _) = state.handle_message(Message::Submit, query);
            assert_eq!(effect, Effect::None);
            assert_eq!(state.phase(), &Phase::Idle);
        }
        assert!(recorded(&lookup).is_empty());
    }

    #[test]
    fn submit_enters_searching_and_looks_up_trimmed_title() {
        let (mut state, lookup) = finder();

        let (effect, _task) = state.handle_message(Message::Submit, "  Forrest Gump ");

        assert_eq!(effect, Effect::None);
        assert!(state.is_loading());
        assert!(state.visibility("  Forrest Gump ").spinner);
        assert!(state.searching_for().is_some());
        assert_eq!(recorded(&lookup), vec!["Forrest Gump".to_string()]);
    }

    #[test]
    fn found_shows_preview_and_clears_query() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Forrest Gump");

        let (effect, _) = state.handle_message(resolved(LookupOutcome::Found(forrest_gump())), "Forrest Gump");

        assert_eq!(effect, Effect::QueryChanged(String::new()));
        let visibility = state.visibility("");
        assert!(visibility.preview);
        assert!(visibility.add_button);
        assert!(!visibility.error);
        assert!(!visibility.spinner);
        let candidate = state.candidate().expect("candidate present");
        assert_eq!(candidate.title, "Forrest Gump");
        assert_eq!(candidate.imdb_url, "https://www.imdb.com/title/tt0109830");
    }

    #[test]
    fn not_found_shows_error_and_clears_query() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Nonexistent1234");

        let (effect, _) = state.handle_message(resolved(LookupOutcome::NotFound), "Nonexistent1234");

        assert_eq!(effect, Effect::QueryChanged(String::new()));
        assert!(state.candidate().is_none());
        let visibility = state.visibility("");
        assert!(visibility.error);
        assert!(!visibility.preview);
        assert!(!visibility.add_button);
        assert!(!visibility.submit_enabled);
    }

    #[test]
    fn failure_is_reported_like_not_found() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Alien");

        let (effect, _) = state.handle_message(
            resolved(LookupOutcome::Failed(LookupError::Status(503))),
            "Alien",
        );

        assert_eq!(effect, Effect::QueryChanged(String::new()));
        assert_eq!(state.phase(), &Phase::NotFound);
        assert!(!state.is_loading());
    }

    #[test]
    fn editing_after_failure_clears_error_and_enables_submit() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Nonexistent1234");
        state.handle_message(resolved(LookupOutcome::NotFound), "Nonexistent1234");

        let (effect, _) = state.handle_message(Message::QueryEdited("A".to_string()), "");

        assert_eq!(effect, Effect::QueryChanged("A".to_string()));
        let visibility = state.visibility("A");
        assert!(!visibility.error);
        assert!(visibility.submit_enabled);
    }

    #[test]
    fn editing_keeps_preview_and_search_untouched() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Forrest Gump");
        state.handle_message(Message::QueryEdited("x".to_string()), "Forrest Gump");
        assert!(state.is_loading());

        state.handle_message(resolved(LookupOutcome::Found(forrest_gump())), "x");
        state.handle_message(Message::QueryEdited("y".to_string()), "");
        assert!(state.candidate().is_some());
    }

    #[test]
    fn add_emits_candidate_once_and_returns_to_idle() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Forrest Gump");
        state.handle_message(resolved(LookupOutcome::Found(forrest_gump())), "Forrest Gump");
        let expected = state.candidate().cloned().expect("candidate present");

        let (first, _) = state.handle_message(Message::AddToList, "");
        let (second, _) = state.handle_message(Message::AddToList, "");

        assert_eq!(first, Effect::AddMovie(expected));
        assert_eq!(second, Effect::None);
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(state.candidate().is_none());
    }

    #[test]
    fn add_without_candidate_keeps_error() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Nope");
        state.handle_message(resolved(LookupOutcome::NotFound), "Nope");

        let (effect, _) = state.handle_message(Message::AddToList, "");

        assert_eq!(effect, Effect::None);
        assert!(state.search_failed());
    }

    #[test]
    fn new_submit_clears_previous_candidate_and_error() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Forrest Gump");
        state.handle_message(resolved(LookupOutcome::Found(forrest_gump())), "Forrest Gump");

        state.handle_message(Message::Submit, "Heat");

        assert!(state.candidate().is_none());
        assert!(!state.search_failed());
        assert!(state.is_loading());
    }

    #[test]
    fn last_resolution_wins() {
        let (mut state, _) = finder();
        state.handle_message(Message::Submit, "Forrest Gump");
        state.handle_message(Message::Submit, "Nonexistent1234");

        state.handle_message(resolved(LookupOutcome::NotFound), "");
        state.handle_message(resolved(LookupOutcome::Found(forrest_gump())), "");

        assert_eq!(
            state.candidate().map(|m| m.imdb_id.as_str()),
            Some("tt0109830")
        );
        assert!(!state.search_failed());
    }

    #[test]
    fn error_and_candidate_are_never_both_present() {
        let (mut state, _) = finder();
        let steps = [
            Message::Submit,
            resolved(LookupOutcome::NotFound),
            Message::Submit,
            resolved(LookupOutcome::Found(forrest_gump())),
            Message::QueryEdited("q".to_string()),
            Message::AddToList,
        ];

        for step in steps {
            state.handle_message(step, "q");
            let visibility = state.visibility("q");
            assert!(!(visibility.error && visibility.preview));
        }
    }

    #[test]
    fn copy_link_is_forwarded() {
        let (mut state, _) = finder();
        let url = "https://www.imdb.com/title/tt0109830".to_string();

        let (effect, _) = state.handle_message(Message::CopyLink(url.clone()), "");

        assert_eq!(effect, Effect::CopyLink(url));
    }

    #[test]
    fn spinner_only_turns_while_searching() {
        let (mut state, _) = finder();
        state.handle_message(Message::SpinnerTick, "");
        assert!(state.spinner_rotation.abs() < f32::EPSILON);

        state.handle_message(Message::Submit, "Heat");
        state.handle_message(Message::SpinnerTick, "Heat");
        assert!(state.spinner_rotation > 0.0);
    }
}

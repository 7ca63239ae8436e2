// SPDX-License-Identifier: MPL-2.0
//! Movie card: poster, title, description and IMDb link.
//!
//! The same card renders the search preview and every entry of the movie
//! list. Posters come from a [`PosterCache`] owned by the application; the
//! card only reads it.

use crate::application::normalize::DEFAULT_POSTER_URL;
use crate::domain::{Movie, PosterCacheCapacity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use lru::LruCache;
use std::num::NonZeroUsize;

// =============================================================================
// Poster Cache
// =============================================================================

/// State of one poster in the cache.
#[derive(Debug, Clone)]
pub enum PosterSlot {
    /// A download is in flight.
    Loading,
    /// Decoded and ready to draw.
    Ready(Handle),
    /// The download failed or there is no poster. Never retried.
    Unavailable,
}

/// Bounded LRU of posters keyed by URL.
#[derive(Debug)]
pub struct PosterCache {
    slots: LruCache<String, PosterSlot>,
}

impl Default for PosterCache {
    fn default() -> Self {
        Self::new(PosterCacheCapacity::default())
    }
}

impl PosterCache {
    #[must_use]
    pub fn new(capacity: PosterCacheCapacity) -> Self {
        let capacity = NonZeroUsize::new(capacity.value()).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
        }
    }

    /// Returns the slot for `url` without touching recency.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&PosterSlot> {
        self.slots.peek(url)
    }

    /// Registers interest in `url` and reports whether it must be downloaded.
    ///
    /// A known URL is marked as recently used and needs no download. An
    /// unknown URL is recorded as [`PosterSlot::Loading`]. The placeholder
    /// poster is never downloaded and is recorded as unavailable.
    pub fn request(&mut self, url: &str) -> bool {
        if self.slots.get(url).is_some() {
            return false;
        }
        if url.is_empty() || url == DEFAULT_POSTER_URL {
            self.slots.put(url.to_string(), PosterSlot::Unavailable);
            return false;
        }
        self.slots.put(url.to_string(), PosterSlot::Loading);
        true
    }

    /// Stores downloaded image bytes for `url`.
    pub fn store(&mut self, url: String, bytes: Vec<u8>) {
        self.slots.put(url, PosterSlot::Ready(Handle::from_bytes(bytes)));
    }

    /// Records that `url` could not be downloaded.
    pub fn mark_unavailable(&mut self, url: String) {
        self.slots.put(url, PosterSlot::Unavailable);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.cap().get()
    }
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub posters: &'a PosterCache,
}

/// Renders `movie`. `on_copy_link` is emitted by the "copy link" button.
pub fn view<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    movie: &'a Movie,
    on_copy_link: Message,
) -> Element<'a, Message> {
    let title = Text::new(movie.title.as_str()).size(typography::TITLE_SM);

    let description: Element<'a, Message> = if movie.description.is_empty() {
        Text::new(ctx.i18n.tr("movie-card-no-description"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            })
            .into()
    } else {
        Text::new(movie.description.as_str())
            .size(typography::BODY)
            .into()
    };

    let link_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(movie.imdb_url.as_str())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
        .push(
            button(Text::new(ctx.i18n.tr("movie-card-copy-link")).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(styles::button::link)
                .on_press(on_copy_link),
        );

    let details = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(title)
        .push(description)
        .push(link_row);

    let content = Row::new()
        .spacing(spacing::MD)
        .push(poster(ctx, &movie.img_url))
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn poster<'a, Message: 'a>(ctx: &ViewContext<'a>, url: &str) -> Element<'a, Message> {
    let label = match ctx.posters.peek(url) {
        Some(PosterSlot::Ready(handle)) => {
            return image(handle.clone())
                .width(Length::Fixed(sizing::POSTER_WIDTH))
                .height(Length::Fixed(sizing::POSTER_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into();
        }
        Some(PosterSlot::Loading) => ctx.i18n.tr("movie-card-poster-loading"),
        Some(PosterSlot::Unavailable) => ctx.i18n.tr("movie-card-no-preview"),
        None => String::new(),
    };

    container(Text::new(label).size(typography::CAPTION))
        .width(Length::Fixed(sizing::POSTER_WIDTH))
        .height(Length::Fixed(sizing::POSTER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::poster_placeholder)
        .into()
}

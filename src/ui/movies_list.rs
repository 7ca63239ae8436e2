// SPDX-License-Identifier: MPL-2.0
//! The list of movies the user has added.

use crate::domain::MovieList;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::movie_card::{self, PosterCache};
use iced::widget::{text, Column, Text};
use iced::{Element, Theme};

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub movies: &'a MovieList,
    pub posters: &'a PosterCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// "Copy link" pressed on a listed movie.
    CopyLink(String),
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let count = ctx.movies.len().to_string();
    let heading = Text::new(ctx.i18n.tr_with_args("movies-list-title", &[("count", &count)]))
        .size(typography::TITLE_MD);

    let mut column = Column::new().spacing(spacing::SM).push(heading);

    if ctx.movies.is_empty() {
        return column
            .push(
                Text::new(ctx.i18n.tr("movies-list-empty"))
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.color),
                    }),
            )
            .into();
    }

    let card_ctx = movie_card::ViewContext {
        i18n: ctx.i18n,
        posters: ctx.posters,
    };
    for movie in ctx.movies.iter() {
        column = column.push(movie_card::view(
            &card_ctx,
            movie,
            Message::CopyLink(movie.imdb_url.clone()),
        ));
    }

    column.into()
}

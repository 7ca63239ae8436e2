// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single screen: header, finder and movie list in a centered scrollable
//! column, with the toast overlay stacked on top.

use super::Message;
use crate::domain::MovieList;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::find_movie;
use crate::ui::header;
use crate::ui::movie_card::PosterCache;
use crate::ui::movies_list;
use crate::ui::notifications::{self, Toast};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    pub find_movie: &'a find_movie::State,
    pub movies: &'a MovieList,
    pub posters: &'a PosterCache,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext { i18n: ctx.i18n }).map(Message::Header);

    let finder_view = find_movie::view(
        ctx.find_movie,
        find_movie::ViewContext {
            i18n: ctx.i18n,
            query: ctx.query,
            posters: ctx.posters,
        },
    )
    .map(Message::FindMovie);

    let list_view = movies_list::view(movies_list::ViewContext {
        i18n: ctx.i18n,
        movies: ctx.movies,
        posters: ctx.posters,
    })
    .map(Message::MoviesList);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header_view)
        .push(finder_view)
        .push(list_view);

    let page = scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}

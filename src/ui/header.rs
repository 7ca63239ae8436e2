// SPDX-License-Identifier: MPL-2.0
//! Header bar with the window title and the language picker.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{pick_list, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A selectable UI language with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Every embedded locale, labelled with its own `language-name-*` entry.
#[must_use]
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales
        .iter()
        .map(|locale| {
            let key = format!("language-name-{locale}");
            let label = i18n.tr(&key);
            LanguageOption {
                locale: locale.clone(),
                label: if label.starts_with("MISSING") {
                    locale.to_string()
                } else {
                    label
                },
            }
        })
        .collect()
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageOption),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
}

/// Turns a header message into an event, ignoring re-selection of the active locale.
#[must_use]
pub fn update(message: Message, current: &LanguageIdentifier) -> Event {
    match message {
        Message::LanguageSelected(option) if &option.locale != current => {
            Event::LanguageChanged(option.locale)
        }
        Message::LanguageSelected(_) => Event::None,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let options = language_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| &option.locale == ctx.i18n.current_locale())
        .cloned();

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("header-language-label")).size(typography::BODY))
        .push(
            pick_list(options, selected, Message::LanguageSelected)
                .text_size(typography::BODY)
                .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn locale(s: &str) -> LanguageIdentifier {
        s.parse().expect("valid locale")
    }

    #[test]
    fn options_are_labelled_in_their_own_language() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let options = language_options(&i18n);

        let french = options
            .iter()
            .find(|o| o.locale == locale("fr"))
            .expect("French is embedded");
        assert_eq!(french.to_string(), "Français");
    }

    #[test]
    fn selecting_another_language_emits_event() {
        let option = LanguageOption {
            locale: locale("fr"),
            label: "Français".to_string(),
        };

        assert_eq!(
            update(Message::LanguageSelected(option.clone()), &locale("en-US")),
            Event::LanguageChanged(locale("fr"))
        );
        assert_eq!(update(Message::LanguageSelected(option), &locale("fr")), Event::None);
    }
}

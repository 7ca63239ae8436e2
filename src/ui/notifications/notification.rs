// SPDX-License-Identifier: MPL-2.0
//! The toasts the finder can raise.
//!
//! Every toast is one [`Notice`]; its message key, arguments, severity and
//! lifetime all follow from that variant.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// How long a success toast stays on screen.
pub const SUCCESS_LIFETIME: Duration = Duration::from_secs(3);
/// Warnings stay longer so they can be read.
pub const WARNING_LIFETIME: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Glyph shown in front of the message.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning => "!",
        }
    }

    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Severity::Success => SUCCESS_LIFETIME,
            Severity::Warning => WARNING_LIFETIME,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MovieAdded { title: String },
    /// The movie was already in the list and was not added again.
    MovieDuplicate { title: String },
    LinkCopied,
    MissingApiKey,
    /// settings.toml was unreadable; defaults are in use.
    ConfigLoadFailed,
    ConfigSaveFailed,
}

impl Notice {
    /// The Fluent key of the message.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::MovieAdded { .. } => "notification-movie-added",
            Notice::MovieDuplicate { .. } => "notification-movie-duplicate",
            Notice::LinkCopied => "notification-link-copied",
            Notice::MissingApiKey => "notification-missing-api-key",
            Notice::ConfigLoadFailed => "notification-config-load-error",
            Notice::ConfigSaveFailed => "notification-config-save-error",
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Notice::MovieAdded { .. } | Notice::LinkCopied => Severity::Success,
            Notice::MovieDuplicate { .. }
            | Notice::MissingApiKey
            | Notice::ConfigLoadFailed
            | Notice::ConfigSaveFailed => Severity::Warning,
        }
    }

    /// Fluent arguments for the message.
    #[must_use]
    pub fn message_args(&self) -> Vec<(&'static str, &str)> {
        match self {
            Notice::MovieAdded { title } | Notice::MovieDuplicate { title } => {
                vec![("title", title.as_str())]
            }
            _ => Vec::new(),
        }
    }
}

/// A notice on its way to, or on, the screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    notice: Notice,
    raised_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(notice: Notice) -> Self {
        Self {
            id: NotificationId::next(),
            notice,
            raised_at: Instant::now(),
        }
    }

    pub fn movie_added(title: impl Into<String>) -> Self {
        Self::new(Notice::MovieAdded {
            title: title.into(),
        })
    }

    pub fn movie_duplicate(title: impl Into<String>) -> Self {
        Self::new(Notice::MovieDuplicate {
            title: title.into(),
        })
    }

    #[must_use]
    pub fn link_copied() -> Self {
        Self::new(Notice::LinkCopied)
    }

    #[must_use]
    pub fn missing_api_key() -> Self {
        Self::new(Notice::MissingApiKey)
    }

    #[must_use]
    pub fn config_load_failed() -> Self {
        Self::new(Notice::ConfigLoadFailed)
    }

    #[must_use]
    pub fn config_save_failed() -> Self {
        Self::new(Notice::ConfigSaveFailed)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.notice.severity()
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.notice.message_key()
    }

    /// Whether the toast has outlived its severity's lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.severity().lifetime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase() {
        let first = Notification::link_copied();
        let second = Notification::link_copied();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn confirmations_are_successes_and_problems_are_warnings() {
        assert_eq!(Notification::movie_added("Heat").severity(), Severity::Success);
        assert_eq!(Notification::link_copied().severity(), Severity::Success);
        for warning in [
            Notification::movie_duplicate("Heat"),
            Notification::missing_api_key(),
            Notification::config_load_failed(),
            Notification::config_save_failed(),
        ] {
            assert_eq!(warning.severity(), Severity::Warning, "{:?}", warning.notice());
        }
    }

    #[test]
    fn title_is_passed_to_the_message() {
        let notice = Notice::MovieDuplicate {
            title: "Alien".to_string(),
        };
        assert_eq!(notice.message_key(), "notification-movie-duplicate");
        assert_eq!(notice.message_args(), vec![("title", "Alien")]);
        assert!(Notice::LinkCopied.message_args().is_empty());
    }

    #[test]
    fn expiry_follows_severity() {
        let added = Notification::movie_added("Heat");
        let duplicate = Notification::movie_duplicate("Heat");
        let later = Instant::now() + SUCCESS_LIFETIME;

        assert!(!added.is_expired(Instant::now()));
        assert!(added.is_expired(later));
        assert!(!duplicate.is_expired(later));
        assert!(duplicate.is_expired(later + WARNING_LIFETIME));
    }

    #[test]
    fn severities_look_different() {
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
        assert_ne!(Severity::Success.symbol(), Severity::Warning.symbol());
    }
}

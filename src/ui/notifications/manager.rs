// SPDX-License-Identifier: MPL-2.0
//! Which toasts are on screen, which wait, and when they go away.

use super::notification::{Notice, Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsCollector;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Toast queue. At most [`MAX_VISIBLE`] are shown, newest first; the rest
/// wait in arrival order.
#[derive(Debug, Default)]
pub struct Manager {
    on_screen: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing any toast with the same notice.
    ///
    /// Warnings are also recorded in `diagnostics`.
    pub fn raise(&mut self, notification: Notification, diagnostics: &mut DiagnosticsCollector) {
        if notification.severity() == Severity::Warning {
            diagnostics.log_warning(describe(notification.notice()));
        }

        let notice = notification.notice().clone();
        self.remove_where(|shown| shown.notice() == &notice);

        if self.on_screen.len() < MAX_VISIBLE {
            self.on_screen.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    /// Removes the toast with `id`. Returns `false` if it was not found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove_where(|n| n.id() == id)
    }

    /// Drops every on-screen toast that has expired at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.remove_where(|n| n.is_expired(now));
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Toasts currently shown, newest first.
    pub fn on_screen(&self) -> impl Iterator<Item = &Notification> {
        self.on_screen.iter()
    }

    #[must_use]
    pub fn on_screen_count(&self) -> usize {
        self.on_screen.len()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_screen.is_empty() && self.waiting.is_empty()
    }

    /// Removes matching toasts from both lists and refills the screen.
    fn remove_where(&mut self, matches: impl Fn(&Notification) -> bool) -> bool {
        let before = self.on_screen.len() + self.waiting.len();
        self.on_screen.retain(|n| !matches(n));
        self.waiting.retain(|n| !matches(n));
        let removed = self.on_screen.len() + self.waiting.len() < before;

        while self.on_screen.len() < MAX_VISIBLE {
            let Some(next) = self.waiting.pop_front() else {
                break;
            };
            self.on_screen.push_back(next);
        }
        removed
    }
}

/// Key plus arguments, e.g. `notification-movie-duplicate (title=Alien)`.
fn describe(notice: &Notice) -> String {
    let args = notice.message_args();
    if args.is_empty() {
        return notice.message_key().to_string();
    }
    let rendered: Vec<String> = args.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{} ({})", notice.message_key(), rendered.join(", "))
}

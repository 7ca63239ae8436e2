// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to confirm
//! actions (movie added, link copied) or to report problems (missing API
//! key, settings not saved) without blocking interaction.
//!
//! # Components
//!
//! - `notification` - The [`Notice`] variants and their severity
//! - `manager` - [`Manager`] queue, replacement and expiry
//! - `toast` - [`Toast`] widget and overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.raise(Notification::link_copied(), &mut diagnostics);
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success toasts last 3s and warnings 6s. At most 3 toasts are visible;
//! the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notice, Notification, NotificationId, Severity};
pub use toast::Toast;

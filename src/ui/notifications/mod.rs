// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting panel outcomes: rejected intents, rejected commits,
//! product updates and settings trouble.
//!
//! - [`notification`] - `Notification`: severity, i18n key, arguments, repeat count
//! - [`manager`] - `Manager`: visible slots, FIFO queue, folding of repeats
//! - [`toast`] - card rendering and the overlay
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-commit-rejected"));
//! let overlay = toast::overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success toasts last 3s, warnings 5s, errors stay until dismissed.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};

// SPDX-License-Identifier: MPL-2.0
//! Toast payloads raised by the shot panel and the application shell.
//!
//! A notification carries an i18n key plus named arguments; the text is only
//! produced at render time. Two notifications with the same key and
//! arguments describe the same event, which lets the manager fold repeats
//! (the same drag failing twice, a second commit rejection) into one toast.

use crate::config::{NOTIFICATION_DISMISS_MS, NOTIFICATION_WARNING_DISMISS_MS};
use crate::domain::error::{AttachmentError, ProductError};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Process-unique handle used by dismiss buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// How loud a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A product association was updated (green, short).
    Success,
    /// Settings or snapshot trouble the panel recovered from (orange, longer).
    Warning,
    /// A rejected intent or commit (red, stays until dismissed).
    Error,
}

impl Severity {
    /// Accent colour of the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Time on screen before the toast leaves by itself; `None` for errors.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_millis(NOTIFICATION_DISMISS_MS)),
            Severity::Warning => Some(Duration::from_millis(NOTIFICATION_WARNING_DISMISS_MS)),
            Severity::Error => None,
        }
    }
}

/// A localised message waiting to be shown as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key resolved at render time.
    message_key: String,
    /// Named Fluent arguments, in insertion order.
    message_args: Vec<(String, String)>,
    /// Last time the event was raised; repeats move it forward.
    raised_at: Instant,
    /// How many times the same event was raised while this toast was alive.
    occurrences: u32,
    /// Overrides [`Severity::auto_dismiss_after`] when set.
    dismiss_after: Option<Duration>,
}

impl Notification {
    /// Creates a notification for `message_key` with no arguments.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            raised_at: Instant::now(),
            occurrences: 1,
            dismiss_after: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument, e.g. the attachment id or the rejected size.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Replaces the severity's on-screen time.
    #[must_use]
    pub fn dismiss_after(mut self, duration: Duration) -> Self {
        self.dismiss_after = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Looks up a single Fluent argument by name.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.message_args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of times this event was raised; at least 1.
    #[must_use]
    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    /// Returns true if `other` reports the same event.
    ///
    /// Severity is part of the identity: an error and a warning with the same
    /// key stay separate toasts.
    #[must_use]
    pub fn is_repeat_of(&self, other: &Notification) -> bool {
        self.severity == other.severity
            && self.message_key == other.message_key
            && self.message_args == other.message_args
    }

    /// Counts another occurrence and restarts the dismiss timer.
    pub(super) fn record_repeat(&mut self) {
        self.occurrences = self.occurrences.saturating_add(1);
        self.raised_at = Instant::now();
    }

    /// Restarts the dismiss timer when a queued toast reaches the screen.
    pub(super) fn record_shown(&mut self) {
        self.raised_at = Instant::now();
    }

    /// Returns true once the toast has been on screen for its full duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.dismiss_after
            .or_else(|| self.severity.auto_dismiss_after())
            .is_some_and(|limit| self.raised_at.elapsed() >= limit)
    }
}

impl From<&AttachmentError> for Notification {
    fn from(err: &AttachmentError) -> Self {
        let notification = Notification::error(err.i18n_key());
        match err {
            AttachmentError::NotFound(id) | AttachmentError::DuplicateId(id) => {
                notification.with_arg("id", id.as_str())
            }
            AttachmentError::Validation(_) => notification,
        }
    }
}

impl From<&ProductError> for Notification {
    fn from(err: &ProductError) -> Self {
        let notification = Notification::error(err.i18n_key());
        match err {
            ProductError::UnavailableSize(size) => notification.with_arg("size", size.as_str()),
            ProductError::EmptySize => notification,
        }
    }
}

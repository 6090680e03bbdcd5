// SPDX-License-Identifier: MPL-2.0
//! Toast bookkeeping for the shot panel.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in FIFO order.
//! Raising an event that is already shown or waiting does not add a toast:
//! the existing one counts the repeat and restarts its timer. Dragging onto a
//! removed attachment several times in a row therefore leaves a single
//! "no longer part of this shot" toast with a repeat count.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages from the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Visible toasts plus the ones waiting for a slot.
#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest first.
    visible: VecDeque<Notification>,
    /// Waiting for a free slot, oldest first.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, folds it into an identical one, or queues it.
    ///
    /// Warnings and errors are also written to the log, repeats included.
    pub fn push(&mut self, notification: Notification) {
        log(&notification);

        let existing = self
            .visible
            .iter_mut()
            .chain(self.queue.iter_mut())
            .find(|shown| shown.is_repeat_of(&notification));
        if let Some(shown) = existing {
            shown.record_repeat();
            tracing::debug!(key = shown.message_key(), occurrences = shown.occurrences(), "notification repeated");
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a toast, visible or queued, and fills the freed slot.
    ///
    /// Returns `false` if no toast has this id.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops visible toasts whose time is up. Queued toasts only start
    /// aging once promoted.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired());
        if self.visible.len() != before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drives the tick subscription: no toasts, no timer.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            // The dismiss timer runs from the moment the toast is shown
            next.record_shown();
            self.visible.push_back(next);
        }
    }
}

fn log(notification: &Notification) {
    let key = notification.message_key();
    let args = notification.message_args();
    match notification.severity() {
        Severity::Error => tracing::error!(key, ?args, "notification"),
        Severity::Warning => tracing::warn!(key, ?args, "notification"),
        Severity::Success => tracing::debug!(key, "notification"),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! The panel describes side effects as [`Effect`] values; this module turns
//! them into Iced tasks and notification pushes.

use super::Message;
use crate::application::port::{ImageResolver, ImageStatus};
use crate::domain::attachment::ImageSource;
use crate::ui::notifications;
use crate::ui::shot_panel::{self, Effect};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the state the update handlers touch.
pub struct UpdateContext<'a> {
    pub panel: &'a mut shot_panel::State,
    pub notifications: &'a mut notifications::Manager,
    pub resolver: &'a Arc<dyn ImageResolver>,
}

/// Routes a panel message and executes the resulting effect.
pub fn handle_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: shot_panel::Message,
) -> Task<Message> {
    let effect = ctx.panel.handle(message);
    run_effect(ctx, effect)
}

/// Executes a panel effect.
pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Commit {
            revision,
            attachments,
        } => {
            // Nothing is persisted here; the snapshot file is read-only input.
            tracing::info!(
                revision,
                attachments = attachments.len(),
                primary = attachments.primary().map(|a| a.id.as_str()).unwrap_or("-"),
                "attachment collection committed"
            );
            Task::done(Message::Panel(shot_panel::Message::Committed(revision)))
        }
        Effect::ResolveImages(requests) => {
            tracing::debug!(count = requests.len(), "resolving attachment images");
            Task::batch(requests.into_iter().map(|(id, source)| {
                resolve_image(ctx.resolver, source, move |status| {
                    shot_panel::Message::ImageResolved(id, status)
                })
            }))
        }
        Effect::ResolveProductImages(requests) => {
            tracing::debug!(count = requests.len(), "resolving product images");
            Task::batch(requests.into_iter().map(|(id, source)| {
                resolve_image(ctx.resolver, source, move |status| {
                    shot_panel::Message::ProductImageResolved(id, status)
                })
            }))
        }
        Effect::ProductUpdated(product) => {
            tracing::info!(
                product = %product.id,
                status = product.status().as_str(),
                size = product.effective_size().unwrap_or("-"),
                "product association updated"
            );
            Task::none()
        }
        Effect::EditProduct(id) => {
            // Size is the only editable field, so editing reopens the picker.
            tracing::debug!(product = %id, "product edit requested");
            Task::done(Message::Panel(shot_panel::Message::ResolveSize(id)))
        }
        Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        Effect::Batch(effects) => {
            let tasks: Vec<Task<Message>> = effects
                .into_iter()
                .map(|effect| run_effect(ctx, effect))
                .collect();
            Task::batch(tasks)
        }
    }
}

/// Resolves one source off the UI thread and reports back to the panel.
fn resolve_image(
    resolver: &Arc<dyn ImageResolver>,
    source: ImageSource,
    on_resolved: impl FnOnce(ImageStatus) -> shot_panel::Message + Send + 'static,
) -> Task<Message> {
    let resolver = Arc::clone(resolver);
    Task::perform(async move { resolver.resolve(&source) }, move |status| {
        Message::Panel(on_resolved(status))
    })
}

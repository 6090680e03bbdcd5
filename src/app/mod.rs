// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct hosts the shot attachment panel: it loads the shot
//! snapshot, answers the panel's commit and image requests, and shows toasts
//! for anything the user should hear about.

pub mod config;
mod message;
pub mod paths;
pub mod snapshot;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageResolver;
use crate::i18n::fluent::I18n;
use crate::infrastructure::LocalImageResolver;
use crate::ui::notifications::{self, Notification};
use crate::ui::shot_panel;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use snapshot::Shot;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Settings directory override; `None` follows CLI, env and platform rules.
    config_dir: Option<PathBuf>,
    shot_title: Option<String>,
    panel: shot_panel::State,
    resolver: Arc<dyn ImageResolver>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("shot_title", &self.shot_title)
            .field("attachments", &self.panel.attachments().len())
            .field("products", &self.panel.products().len())
            .field("in_flight", &self.panel.in_flight())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            config_dir: None,
            shot_title: None,
            panel: shot_panel::State::new(Default::default(), Vec::new()),
            resolver: Arc::new(LocalImageResolver::default()),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Window settings for the panel.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(1100.0, 760.0),
        min_size: Some(Size::new(640.0, 480.0)),
        ..window::Settings::default()
    }
}

/// Launches the application.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and the optional snapshot, then requests the first
    /// round of thumbnail images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let shot = match flags.snapshot_path.as_deref() {
            Some(path) => load_shot(path, &mut notifications),
            None => Shot::default(),
        };

        let library_root = paths::library_root(
            config.library.root_dir.as_deref(),
            flags.snapshot_path.as_deref(),
        );
        tracing::debug!(root = ?library_root, "image library root");

        let mut app = App {
            i18n,
            config,
            config_dir: None,
            shot_title: shot.title,
            panel: shot_panel::State::new(shot.attachments, shot.products),
            resolver: Arc::new(LocalImageResolver::new(library_root)),
            notifications,
        };

        let requests = app.panel.image_requests();
        let task = update::run_effect(&mut app.update_context(), requests);
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            panel: &mut self.panel,
            notifications: &mut self.notifications,
            resolver: &self.resolver,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match &self.shot_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(panel_message) => {
                update::handle_panel_message(&mut self.update_context(), panel_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CycleTheme => {
                self.cycle_theme();
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    /// Switches to the next theme mode and writes it to `settings.toml`.
    ///
    /// The new mode stays active for this session even when saving fails.
    fn cycle_theme(&mut self) {
        let mode = self.config.general.theme_mode.next();
        self.config.general.theme_mode = mode;
        match config::save_with_override(&self.config, self.config_dir.clone()) {
            Ok(()) => tracing::info!(?mode, "theme mode saved"),
            Err(err) => {
                tracing::warn!(?mode, error = %err, "failed to save theme mode");
                self.notifications.push(
                    Notification::warning("notification-config-save-error")
                        .with_arg("error", err.to_string()),
                );
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            shot_title: self.shot_title.as_deref(),
            panel: &self.panel,
            notifications: &self.notifications,
        })
    }
}

fn load_shot(path: &Path, notifications: &mut notifications::Manager) -> Shot {
    match snapshot::load_from_path(path) {
        Ok(shot) => shot,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to load shot snapshot");
            notifications.push(
                Notification::error("notification-snapshot-load-error")
                    .with_arg("error", err.to_string()),
            );
            Shot::default()
        }
    }
}

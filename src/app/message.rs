// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::shot_panel;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(shot_panel::Message),
    Notification(notifications::NotificationMessage),
    /// Header toggle: switch to the next theme mode and persist it.
    CycleTheme,
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOTLIST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional shot snapshot to open on startup.
    pub snapshot_path: Option<PathBuf>,
}

// SPDX-License-Identifier: MPL-2.0
//! Locations Shotlist reads from besides the shot snapshot itself.
//!
//! # Settings directory
//!
//! `settings.toml` lives in the first directory found among:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - recorded by [`init_cli_overrides`]
//! 3. **Environment variable** (`SHOTLIST_CONFIG_DIR`), ignored when empty
//! 4. **Platform default** - via `dirs` crate, with `Shotlist` appended
//!
//! # Image library root
//!
//! Relative attachment and product image references are resolved against
//! [`library_root`]: the `[library] root_dir` setting when present, else the
//! directory holding the snapshot file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory name appended to the platform config directory.
const APP_NAME: &str = "Shotlist";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SHOTLIST_CONFIG_DIR";

/// `--config-dir` value, recorded once at startup.
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which rule picked the settings directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirOrigin {
    Override,
    Cli,
    Env,
    Platform,
}

impl fmt::Display for ConfigDirOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigDirOrigin::Override => "override",
            ConfigDirOrigin::Cli => "cli",
            ConfigDirOrigin::Env => "env",
            ConfigDirOrigin::Platform => "platform",
        })
    }
}

/// Settings directory together with the rule that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    pub path: PathBuf,
    pub origin: ConfigDirOrigin,
}

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are logged and ignored so
/// that tests booting several apps in one process do not abort.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("--config-dir override already recorded, ignoring");
    }
}

/// Returns the settings directory, `override_path` first, then CLI,
/// environment and platform defaults. `None` only when the platform has no
/// config directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let resolved = resolve_config_dir(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from),
        dirs::config_dir(),
    )?;
    tracing::debug!(path = %resolved.path.display(), origin = %resolved.origin, "settings directory");
    Some(resolved.path)
}

/// Applies the resolution order to already gathered candidates.
fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    platform: Option<PathBuf>,
) -> Option<ConfigDir> {
    let env = env.filter(|path| !path.as_os_str().is_empty());
    let candidates = [
        (override_path, ConfigDirOrigin::Override),
        (cli, ConfigDirOrigin::Cli),
        (env, ConfigDirOrigin::Env),
        (platform.map(|dir| dir.join(APP_NAME)), ConfigDirOrigin::Platform),
    ];
    candidates
        .into_iter()
        .find_map(|(path, origin)| path.map(|path| ConfigDir { path, origin }))
}

/// Directory relative image references are resolved against.
///
/// A snapshot given as a bare file name has no usable parent, so the
/// resolver then falls back to the working directory.
pub fn library_root(configured: Option<&Path>, snapshot_path: Option<&Path>) -> Option<PathBuf> {
    configured.map(Path::to_path_buf).or_else(|| {
        snapshot_path
            .and_then(Path::parent)
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    })
}

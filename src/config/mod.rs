// SPDX-License-Identifier: MPL-2.0
//! Persisted toast defaults, stored in a `toast.toml` file.
//!
//! # Configuration Sections
//!
//! - `[defaults]` - Values used when a request leaves a field unspecified
//!
//! Values are kept as written and are not validated on load: they go through
//! the same validation as any other request once a toast is prepared.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, see [`crate::app::paths`]
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! let (mut config, _warning) = config::load();
//! config.defaults.position = Some("upper-right".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::app::paths;
use crate::domain::toast::ToastRequest;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toast.toml";

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: ToastDefaults,
}

/// Per-user replacements for the built-in request defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastDefaults {
    /// Display duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,

    /// Background color (`#RRGGBB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Screen position name (e.g. `"bottom-right"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Font family for title and message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Icon image shown in the top-left corner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

impl ToastDefaults {
    /// Builds a request from the built-in defaults overlaid with these values.
    #[must_use]
    pub fn request(&self) -> ToastRequest {
        let mut request = ToastRequest::default();
        if let Some(secs) = self.duration_secs {
            request.duration_secs = secs;
        }
        if let Some(color) = &self.color {
            request.color.clone_from(color);
        }
        if let Some(position) = &self.position {
            request.position.clone_from(position);
        }
        request.font.clone_from(&self.font);
        request.icon.clone_from(&self.icon);
        request
    }

    /// Captures the presentation settings of `request`. Title and message are
    /// never persisted.
    #[must_use]
    pub fn from_request(request: &ToastRequest) -> Self {
        Self {
            duration_secs: Some(request.duration_secs),
            color: Some(request.color.clone()),
            position: Some(request.position.clone()),
            font: request.font.clone(),
            icon: request.icon.clone(),
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or malformed one yields the default config plus a
/// warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring config file {}: {err}",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no config directory available on this platform".to_string(),
        )),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

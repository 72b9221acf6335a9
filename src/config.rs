use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Location of the user overlay, before tilde expansion.
const USER_CONFIG: &str = "~/.config/shale/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub applications: Applications,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Wrap every program in the help wrapper and register `help`.
    #[serde(rename = "help")]
    pub help_wrappers: bool,
    /// Register an unsafe variant of every program.
    #[serde(rename = "unsafe")]
    pub unsafe_wrappers: bool,
    pub unsafe_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            help_wrappers: true,
            unsafe_wrappers: true,
            unsafe_prefix: "_".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file; a leading `~` is expanded.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: "~/.local/share/shale/shale.log".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Applications {
    /// Built-ins left out of the registry.
    #[serde(default)]
    pub disabled: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    logging: LoggingOverlay,
    #[serde(default)]
    applications: ApplicationsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    help: Option<bool>,
    #[serde(rename = "unsafe")]
    unsafe_wrappers: Option<bool>,
    unsafe_prefix: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    level: Option<String>,
    file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ApplicationsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    disabled: Vec<String>,
    #[serde(default)]
    remove_disabled: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/shale/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Path of the user overlay with `~` expanded.
    pub fn user_config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(USER_CONFIG).into_owned())
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let content = std::fs::read_to_string(Self::user_config_path()).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("shale: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.help {
            self.settings.help_wrappers = v;
        }
        if let Some(v) = s.unsafe_wrappers {
            self.settings.unsafe_wrappers = v;
        }
        if let Some(v) = s.unsafe_prefix {
            self.settings.unsafe_prefix = v;
        }

        let l = overlay.logging;
        if let Some(v) = l.level {
            self.logging.level = v;
        }
        if let Some(v) = l.file {
            self.logging.file = v;
        }

        let a = overlay.applications;
        merge_list(
            &mut self.applications.disabled,
            a.disabled,
            &a.remove_disabled,
            a.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    pub(crate) fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

//! almostevery: a Zellij plugin for browsing (almost) every `vercel.app` domain.
//!
//! The plugin loads a newline-delimited list of domains once, shuffles it, and
//! shows it as a searchable list. Typing filters the list by case-insensitive
//! substring; Enter or a click opens the domain in the browser.
//!
//! Lists run to hundreds of thousands of entries, so only the rows inside the
//! viewport (plus a small overscan) are ever materialized.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, selection, scrolling             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Domain Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (domain/)     │   │ (worker/)     │
//! │ - Virtual list│   │ - Browser     │   │ - List loader │
//! │ - Components  │   │ - Filter      │   │ - IPC bridge  │
//! │ - Theming     │   │ - Shuffle     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (infrastructure/, observability/)   │
//! │  - Sandbox paths, OTLP file tracing                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:almostevery.wasm" {
//!     domain_file "vercel-domain-list.txt"
//!     theme "catppuccin-mocha"
//!     row_height "1"
//!     overscan "2"
//!     open_command "xdg-open"
//!     hyperlinks "true"
//!     trace_level "info"
//! }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, ListOptions, LoadState};
pub use domain::{AlmostEveryError, DomainBrowser, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DOMAIN_FILE: &str = "vercel-domain-list.txt";
const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Domain list location; `~` and relative paths resolve under `/host`.
    pub domain_file: String,

    /// Built-in theme name.
    pub theme_name: Option<String>,

    /// Custom theme TOML; wins over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing.
    pub trace_level: Option<String>,

    /// Lines per list row, at least 1.
    pub row_height: usize,

    pub overscan: usize,

    /// Program run with the URL as its only argument.
    pub open_command: String,

    /// Emit OSC 8 hyperlinks.
    pub hyperlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain_file: DEFAULT_DOMAIN_FILE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            row_height: 1,
            overscan: 2,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            hyperlinks: true,
        }
    }
}

impl Config {
    /// Parses the plugin's key/value configuration.
    ///
    /// Missing keys take their defaults. Malformed values are logged and also
    /// fall back to the default, so a typo never prevents the plugin from
    /// loading.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let row_height = parse_or(config, "row_height", defaults.row_height);
        let row_height = if row_height == 0 {
            tracing::debug!(error = %AlmostEveryError::Config("row_height must be at least 1".to_string()), "using default");
            defaults.row_height
        } else {
            row_height
        };

        Self {
            domain_file: text("domain_file").unwrap_or(defaults.domain_file),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            row_height,
            overscan: parse_or(config, "overscan", defaults.overscan),
            open_command: text("open_command").unwrap_or(defaults.open_command),
            hyperlinks: parse_or(config, "hyperlinks", defaults.hyperlinks),
        }
    }

    /// Sandbox path of the domain list.
    #[must_use]
    pub fn domain_path(&self) -> PathBuf {
        infrastructure::resolve_host_path(&self.domain_file)
    }

    #[must_use]
    pub const fn list_options(&self) -> ListOptions {
        ListOptions {
            item_height: self.row_height,
            overscan: self.overscan,
            hyperlinks: self.hyperlinks,
        }
    }

    /// Resolves the configured theme, falling back to the default on any error.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::resolve_host_path(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Parses `config[key]`, keeping `default` when the key is absent or invalid.
fn parse_or<T>(config: &BTreeMap<String, String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = config.get(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e: T::Err| {
        let error = AlmostEveryError::Config(format!("invalid {key} {raw:?}: {e}"));
        tracing::debug!(error = %error, "using default");
        default
    })
}

/// Builds the initial application state, waiting for the domain list.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(domain_file = %config.domain_file, "initializing almostevery plugin");
    AppState::new(config.theme(), config.list_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(
            Config::default().domain_path(),
            PathBuf::from("/host/vercel-domain-list.txt")
        );
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("domain_file", "~/lists/domains.txt"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
            ("row_height", "2"),
            ("overscan", " 5 "),
            ("open_command", "open"),
            ("hyperlinks", "false"),
        ]));

        assert_eq!(config.domain_path(), PathBuf::from("/host/lists/domains.txt"));
        assert_eq!(config.theme().name, "catppuccin-latte");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.list_options(),
            ListOptions {
                item_height: 2,
                overscan: 5,
                hyperlinks: false
            }
        );
        assert_eq!(config.open_command, "open");
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("row_height", "0"),
            ("overscan", "-1"),
            ("hyperlinks", "yes"),
            ("open_command", "  "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "nord")]));
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn initialize_starts_loading() {
        let state = initialize(&Config::default());
        assert!(matches!(state.load, LoadState::Loading));
        assert_eq!(state.options, ListOptions::default());
    }
}

//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavours, embedded at compile time.
//! Custom themes are TOML files with the same shape.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! placeholder_fg = "#6c7086"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! link_fg = "#89b4fa"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{AlmostEveryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Domain text color.
    pub text_normal: String,
    /// Secondary text: description, counter, footer.
    pub text_dim: String,

    /// Separator line color.
    pub border: String,

    /// Search box frame color.
    pub search_bar_border: String,
    /// Placeholder text shown while the query is empty.
    pub placeholder_fg: String,

    /// Matched substring foreground.
    pub match_highlight_fg: String,
    /// Matched substring background.
    pub match_highlight_bg: String,

    /// Header links and the open-row arrow.
    pub link_fg: String,

    /// Loading message color.
    pub empty_state_fg: String,
    /// Fatal load error color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AlmostEveryError::Theme`] if the file cannot be read or its
    /// TOML does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| AlmostEveryError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| AlmostEveryError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB. Malformed colors become white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} failed to parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = include_str!("../../themes/catppuccin-mocha.toml");
        write!(file, "{}", mocha.replace("catppuccin-mocha", "custom")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(AlmostEveryError::Theme(_))));
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
    }
}

//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two Catppuccin variants are embedded in the
//! binary; any other palette can be loaded from a file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#313244"          # optional
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! bar_fg = "#1e1e2e"
//! bar_bg = "#89b4fa"
//! loading_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! open_marker_fg = "#a6e3a1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use tie_archive::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(Theme::fg("#000000"), "\u{1b}[38;2;0;0;0m");
//! # let _ = theme;
//! ```

use crate::domain::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground color.
    pub selection_fg: String,
    /// Cursor row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, dates, position indicator).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Viewer action bar foreground.
    pub bar_fg: String,
    /// Viewer action bar background.
    pub bar_bg: String,

    /// `Loading PDF...` indicator color.
    pub loading_fg: String,
    /// Viewer failure message color.
    pub error_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Marker of the document open in the viewer.
    pub open_marker_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = builtin_source(name)?;
        match Self::parse(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme_name = %name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Theme`] if the file cannot be read or its
    /// contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ArchiveError::Theme(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Theme`] on invalid syntax or missing colors.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ArchiveError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
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

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the embedded default cannot be parsed.
    fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: color("#cdd6f4"),
                header_bg: None,
                selection_fg: color("#1e1e2e"),
                selection_bg: color("#f5c2e7"),
                text_normal: color("#cdd6f4"),
                text_dim: color("#6c7086"),
                border: color("#45475a"),
                bar_fg: color("#1e1e2e"),
                bar_bg: color("#89b4fa"),
                loading_fg: color("#f9e2af"),
                error_fg: color("#f38ba8"),
                empty_state_fg: color("#89b4fa"),
                open_marker_fg: color("#a6e3a1"),
            },
        }
    }
}

fn builtin_source(name: &str) -> Option<&'static str> {
    match name {
        "catppuccin-mocha" => Some(include_str!("../../themes/catppuccin-mocha.toml")),
        "catppuccin-latte" => Some(include_str!("../../themes/catppuccin-latte.toml")),
        _ => None,
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_matches_embedded_mocha() {
        let theme = Theme::default();
        assert_eq!(theme.name, "catppuccin-mocha");
        assert_eq!(theme.colors, Theme::fallback().colors);
    }

    #[test]
    fn from_file_reads_custom_palette() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme {
            name: "custom".to_string(),
            ..Theme::default()
        })
        .unwrap();
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn missing_colors_are_a_theme_error() {
        let err = Theme::parse("name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap_err();
        assert!(matches!(err, ArchiveError::Theme(_)));

        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, ArchiveError::Theme(_)));
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zz0000"), "\u{1b}[48;2;255;0;0m");
        assert_eq!(Theme::fg(" #a6e3a1 "), "\u{1b}[38;2;166;227;161m");
    }
}

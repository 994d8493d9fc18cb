//! Configuration file support
//!
//! Loads settings from ~/.sidenote.toml (or %USERPROFILE%\.sidenote.toml
//! on Windows). Missing files, malformed documents, and unrecognized
//! values all fall back to defaults; configuration can degrade the
//! styling experience but never break the editor.
//!
//! Example:
//! ```text
//! # sidenote configuration
//! highlighting = true
//! span-scope = "whole-match"
//!
//! [theme]
//! accent = "#0a84ff"
//! image-accent = "#bf5af2"
//! ```

use std::fs;
use std::path::PathBuf;

use toml::Table;

use crate::error::{EditorError, Result};
use crate::syntax::SpanScope;
use crate::theme::{Rgb, Theme};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Whether the tokenizer runs at all
    pub highlighting: bool,
    /// How much of a match carries attributes (markers included or not)
    pub span_scope: SpanScope,
    /// Colors for the semantic tokens
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            highlighting: true,
            span_scope: SpanScope::default(),
            theme: Theme::default(),
        }
    }
}

impl EditorConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".sidenote.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".sidenote.toml"))
        }
    }

    /// Load configuration from file, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| Self::from_toml(&contents).ok())
            .unwrap_or_default()
    }

    /// Parse a TOML document and apply recognized keys over the defaults.
    ///
    /// Unknown keys are ignored and malformed values keep their default;
    /// only a document that fails to parse at all is an error.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table = contents
            .parse::<Table>()
            .map_err(|e| EditorError::Config(e.to_string()))?;
        let mut config = Self::default();
        config.apply(&table);
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) {
        if let Some(value) = table.get("highlighting").and_then(|v| v.as_bool()) {
            self.highlighting = value;
        }

        if let Some(value) = table.get("span-scope").and_then(|v| v.as_str()) {
            match value {
                "whole-match" => self.span_scope = SpanScope::WholeMatch,
                "inner-text" => self.span_scope = SpanScope::InnerText,
                _ => {}
            }
        }

        if let Some(theme) = table.get("theme").and_then(|v| v.as_table()) {
            apply_color(theme, "primary", &mut self.theme.primary);
            apply_color(theme, "secondary", &mut self.theme.secondary);
            apply_color(theme, "accent", &mut self.theme.accent);
            apply_color(theme, "image-accent", &mut self.theme.image_accent);
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            fs::write(path, self.render())?;
        }
        Ok(())
    }

    /// Render the settings as a TOML document
    fn render(&self) -> String {
        let span_scope = match self.span_scope {
            SpanScope::WholeMatch => "whole-match",
            SpanScope::InnerText => "inner-text",
        };
        format!(
            "# sidenote configuration\n\
             # Generated automatically\n\n\
             highlighting = {}\n\
             span-scope = \"{}\"\n\n\
             [theme]\n\
             primary = \"{}\"\n\
             secondary = \"{}\"\n\
             accent = \"{}\"\n\
             image-accent = \"{}\"\n",
            self.highlighting,
            span_scope,
            self.theme.primary.to_hex(),
            self.theme.secondary.to_hex(),
            self.theme.accent.to_hex(),
            self.theme.image_accent.to_hex(),
        )
    }
}

/// Apply one hex color setting, keeping the default on a bad value
fn apply_color(table: &Table, key: &str, slot: &mut Rgb) {
    if let Some(color) = table
        .get(key)
        .and_then(|v| v.as_str())
        .and_then(Rgb::from_hex)
    {
        *slot = color;
    }
}

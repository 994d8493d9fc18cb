//! Inline style variants and their marker literals

/// An inline markdown style the editor can toggle.
///
/// Each style maps to a fixed pair of ASCII marker literals. Markers are
/// never escaped and never configurable; they double as the persisted
/// plain-text format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Strikethrough,
    Underline,
}

impl InlineStyle {
    /// Opening marker literal
    pub fn marker(self) -> &'static str {
        match self {
            InlineStyle::Bold => "*",
            InlineStyle::Italic => "_",
            InlineStyle::Strikethrough => "-",
            // Not a simple symmetric wrap
            InlineStyle::Underline => "<u>",
        }
    }

    /// Closing marker literal. Only underline differs from its opener.
    pub fn closing_marker(self) -> &'static str {
        match self {
            InlineStyle::Underline => "</u>",
            _ => self.marker(),
        }
    }
}

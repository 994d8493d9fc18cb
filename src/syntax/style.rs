//! Visual attributes and styled spans
//!
//! Attributes are semantic: weight, slant, decorations, and a color
//! token. Concrete fonts and colors are the host's concern (see the
//! theme module for a default mapping).

use crate::range::TextRange;

/// Font weight of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Semantic color tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorToken {
    /// Regular text
    #[default]
    Primary,
    /// Muted text (struck-through regions)
    Secondary,
    /// Headings
    Accent,
    /// Image references
    ImageAccent,
}

/// Visual attributes applied to a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAttributes {
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub underline: bool,
    pub strikethrough: bool,
    pub color: ColorToken,
}

impl TextAttributes {
    /// Base attributes: normal weight and slant, primary color, no
    /// decorations
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bold weight
    pub fn with_bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Builder: italic slant
    pub fn with_italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    /// Builder: underlined
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builder: struck through
    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Builder: set color token
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Check if this is the base styling
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `overlay` on top of these attributes. Non-default fields
    /// of the overlay win; everything else is kept, so overlapping rules
    /// layer additively instead of erasing one another.
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            weight: match overlay.weight {
                FontWeight::Normal => self.weight,
                other => other,
            },
            slant: match overlay.slant {
                FontSlant::Normal => self.slant,
                other => other,
            },
            underline: self.underline || overlay.underline,
            strikethrough: self.strikethrough || overlay.strikethrough,
            color: match overlay.color {
                ColorToken::Primary => self.color,
                other => other,
            },
        }
    }
}

/// A contiguous run of text carrying visual attributes
///
/// Ranges are UTF-16 based like everything else crossing the host
/// boundary. Spans are recomputed on every change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    pub range: TextRange,
    pub attrs: TextAttributes,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(range: TextRange, attrs: TextAttributes) -> Self {
        Self { range, attrs }
    }
}

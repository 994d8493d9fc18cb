//! Concrete colors for semantic tokens
//!
//! The tokenizer only ever emits [`ColorToken`]s; hosts with their own
//! design system map the tokens themselves. This module is the default
//! mapping for hosts that want one, overridable from the config file.

use crate::syntax::ColorToken;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse "#rrggbb" (leading '#' optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(s, 16).ok()?;
        Some(Self(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Format as "#rrggbb"
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Maps each semantic color token to a concrete color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub image_accent: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgb(0x1d, 0x1d, 0x1f),
            secondary: Rgb(0x8e, 0x8e, 0x93),
            accent: Rgb(0x0a, 0x84, 0xff),
            image_accent: Rgb(0xbf, 0x5a, 0xf2),
        }
    }
}

impl Theme {
    /// Concrete color for a token
    pub fn color(&self, token: ColorToken) -> Rgb {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::ImageAccent => self.image_accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#0a84ff"), Some(Rgb(0x0a, 0x84, 0xff)));
        assert_eq!(Rgb::from_hex("0a84ff"), Some(Rgb(0x0a, 0x84, 0xff)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb(0xbf, 0x5a, 0xf2);
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_token_mapping() {
        let theme = Theme::default();
        assert_eq!(theme.color(ColorToken::Accent), theme.accent);
        assert_eq!(theme.color(ColorToken::ImageAccent), theme.image_accent);
        assert_ne!(
            theme.color(ColorToken::Primary),
            theme.color(ColorToken::Secondary)
        );
    }
}

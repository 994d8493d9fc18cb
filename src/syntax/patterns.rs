//! Compiled highlight patterns
//!
//! The six fixed matchers the tokenizer runs over the buffer, in
//! evaluation order. The set is compiled once per process and held for
//! its lifetime; a rule whose pattern fails to compile is dropped so the
//! remaining rules still run.

use std::sync::OnceLock;

use regex::Regex;

use super::style::{ColorToken, TextAttributes};

/// A single highlight rule: a compiled pattern and the attributes it
/// lays down on each match.
pub struct HighlightRule {
    /// Name for debugging
    pub name: &'static str,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Attributes applied to each match
    pub attrs: TextAttributes,
    /// A match is dropped when the character immediately before or after
    /// it equals this guard. Used by the bold rule: a `*` touching
    /// another `*` neither starts nor ends a span, keeping `**` free for
    /// a future double-asterisk convention.
    neighbor_guard: Option<char>,
}

impl HighlightRule {
    /// Create a new rule. Returns `None` when the pattern does not
    /// compile.
    fn new(name: &'static str, pattern: &str, attrs: TextAttributes) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name,
            pattern: regex,
            attrs,
            neighbor_guard: None,
        })
    }

    fn with_neighbor_guard(mut self, guard: char) -> Self {
        self.neighbor_guard = Some(guard);
        self
    }

    /// Whether a match spanning `start..end` (byte offsets) survives the
    /// neighbor guard.
    pub fn accepts(&self, text: &str, start: usize, end: usize) -> bool {
        let Some(guard) = self.neighbor_guard else {
            return true;
        };
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        before != Some(guard) && after != Some(guard)
    }
}

/// The fixed rule set, in evaluation order. Later rules layer on top of
/// earlier ones where matches overlap.
pub fn highlight_rules() -> &'static [HighlightRule] {
    static RULES: OnceLock<Vec<HighlightRule>> = OnceLock::new();
    RULES.get_or_init(build_rules)
}

fn build_rules() -> Vec<HighlightRule> {
    let mut rules = Vec::new();

    // Heading lines: 1-6 '#' then whitespace, to end of line
    if let Some(rule) = HighlightRule::new(
        "heading",
        r"(?m)^#{1,6}\s.*$",
        TextAttributes::new().with_bold().with_color(ColorToken::Accent),
    ) {
        rules.push(rule);
    }

    if let Some(rule) = HighlightRule::new(
        "underline",
        r"<u>(.+?)</u>",
        TextAttributes::new().with_underline(),
    ) {
        rules.push(rule);
    }

    // The star content excludes '*' so candidates stay minimal; the
    // neighbor guard enforces the no-adjacent-star rule on both ends
    if let Some(rule) = HighlightRule::new(
        "bold",
        r"\*([^*\n]+)\*",
        TextAttributes::new().with_bold(),
    ) {
        rules.push(rule.with_neighbor_guard('*'));
    }

    if let Some(rule) = HighlightRule::new(
        "italic",
        r"_(.+?)_",
        TextAttributes::new().with_italic(),
    ) {
        rules.push(rule);
    }

    if let Some(rule) = HighlightRule::new(
        "strikethrough",
        r"-(.+?)-",
        TextAttributes::new()
            .with_strikethrough()
            .with_color(ColorToken::Secondary),
    ) {
        rules.push(rule);
    }

    if let Some(rule) = HighlightRule::new(
        "image",
        r"!\[.*?\]\(.*?\)",
        TextAttributes::new().with_color(ColorToken::ImageAccent),
    ) {
        rules.push(rule);
    }

    rules
}

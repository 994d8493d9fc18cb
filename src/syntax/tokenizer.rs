//! Full-buffer tokenization
//!
//! Re-derives visual styling from the raw markdown-like text. The whole
//! buffer is re-scanned after every change; buffers are document-sized,
//! so correctness rather than incrementality is the contract. Unmatched
//! or malformed markers simply produce no span for their rule.

use crate::range::{self, TextRange};

use super::patterns::{highlight_rules, HighlightRule};
use super::style::{StyledSpan, TextAttributes};

/// How much of a match carries the attributes: the full matched span
/// including markers, or only the inner captured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanScope {
    /// Style the whole match, markers included (the native text-view
    /// convention)
    #[default]
    WholeMatch,
    /// Style only the first capture group. Rules without a capture
    /// group fall back to the whole match.
    InnerText,
}

/// Tokenize a buffer with the default whole-match scope.
pub fn tokenize(text: &str) -> Vec<StyledSpan> {
    tokenize_with(text, SpanScope::default())
}

/// Tokenize a buffer into styled spans.
///
/// The first span carries the base attributes over the whole buffer;
/// the six rules then layer their spans on top in order, additively.
/// Pure and deterministic: repeated calls over the same buffer yield
/// identical output. Emitted ranges are UTF-16 code units.
pub fn tokenize_with(text: &str, scope: SpanScope) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return spans;
    }

    spans.push(StyledSpan::new(
        TextRange::new(0, range::utf16_len(text)),
        TextAttributes::default(),
    ));

    for rule in highlight_rules() {
        collect_rule_spans(text, rule, scope, &mut spans);
    }
    spans
}

fn collect_rule_spans(
    text: &str,
    rule: &HighlightRule,
    scope: SpanScope,
    spans: &mut Vec<StyledSpan>,
) {
    for caps in rule.pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if !rule.accepts(text, whole.start(), whole.end()) {
            continue;
        }

        let (start, end) = match scope {
            SpanScope::WholeMatch => (whole.start(), whole.end()),
            SpanScope::InnerText => caps
                .get(1)
                .map_or((whole.start(), whole.end()), |g| (g.start(), g.end())),
        };

        let location = range::utf16_offset(text, start);
        let length = range::utf16_offset(text, end) - location;
        spans.push(StyledSpan::new(TextRange::new(location, length), rule.attrs));
    }
}

/// Resolve the effective attributes at a single UTF-16 offset by folding
/// every span covering it, in emission order.
pub fn attributes_at(spans: &[StyledSpan], offset: usize) -> TextAttributes {
    spans
        .iter()
        .filter(|span| span.range.contains(offset))
        .fold(TextAttributes::default(), |acc, span| acc.merge(span.attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::{ColorToken, FontSlant, FontWeight};

    #[test]
    fn test_empty_buffer_yields_no_spans() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_plain_text_gets_base_span_only() {
        let spans = tokenize("just words");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, TextRange::new(0, 10));
        assert!(spans[0].attrs.is_default());
    }

    #[test]
    fn test_heading_and_bold_layer_additively() {
        let spans = tokenize("# *Heading*");

        // Heading span over the whole line, bold + accent
        let heading = spans
            .iter()
            .find(|s| s.range == TextRange::new(0, 11) && !s.attrs.is_default())
            .expect("heading span");
        assert_eq!(heading.attrs.weight, FontWeight::Bold);
        assert_eq!(heading.attrs.color, ColorToken::Accent);

        // Independent bold span over "*Heading*"
        let bold = spans
            .iter()
            .find(|s| s.range == TextRange::new(2, 9))
            .expect("bold span");
        assert_eq!(bold.attrs.weight, FontWeight::Bold);

        // Bold weight holds on the overlap no matter which rule wins
        let resolved = attributes_at(&spans, 4);
        assert_eq!(resolved.weight, FontWeight::Bold);
        assert_eq!(resolved.color, ColorToken::Accent);
    }

    #[test]
    fn test_unterminated_bold_produces_no_span() {
        let spans = tokenize("*unterminated bold");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].attrs.is_default());
    }

    #[test]
    fn test_double_star_is_not_bold() {
        let spans = tokenize("**shout**");
        assert!(spans.iter().all(|s| s.attrs.weight == FontWeight::Normal));
    }

    #[test]
    fn test_underline_span_includes_markers() {
        let spans = tokenize("a <u>b</u> c");
        let underline = spans.iter().find(|s| s.attrs.underline).expect("span");
        assert_eq!(underline.range, TextRange::new(2, 8));
    }

    #[test]
    fn test_inner_text_scope_drops_markers() {
        let spans = tokenize_with("a <u>b</u> c", SpanScope::InnerText);
        let underline = spans.iter().find(|s| s.attrs.underline).expect("span");
        assert_eq!(underline.range, TextRange::new(5, 1));
    }

    #[test]
    fn test_inner_text_scope_without_group_keeps_whole_match() {
        // The image rule has no capture group
        let spans = tokenize_with("![alt](pic.png)", SpanScope::InnerText);
        let image = spans
            .iter()
            .find(|s| s.attrs.color == ColorToken::ImageAccent)
            .expect("span");
        assert_eq!(image.range, TextRange::new(0, 15));
    }

    #[test]
    fn test_strikethrough_is_muted() {
        let spans = tokenize("keep -drop- keep");
        let strike = spans.iter().find(|s| s.attrs.strikethrough).expect("span");
        assert_eq!(strike.range, TextRange::new(5, 6));
        assert_eq!(strike.attrs.color, ColorToken::Secondary);
    }

    #[test]
    fn test_italic_span() {
        let spans = tokenize("x _slanted_ y");
        let italic = spans
            .iter()
            .find(|s| s.attrs.slant == FontSlant::Italic)
            .expect("span");
        assert_eq!(italic.range, TextRange::new(2, 9));
    }

    #[test]
    fn test_spans_use_utf16_offsets() {
        // The emoji occupies two code units, so the bold span shifts by
        // one relative to its char position
        let spans = tokenize("😀 *b*");
        let bold = spans
            .iter()
            .find(|s| s.attrs.weight == FontWeight::Bold)
            .expect("span");
        assert_eq!(bold.range, TextRange::new(3, 3));
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "# Title\n*b* _i_ -s- <u>u</u> ![a](r)";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_rule_order_heading_first() {
        // The heading span precedes the bold span in emission order, so
        // later rules overwrite on conflict per the fixed ordering
        let spans = tokenize("# *H*");
        let styled: Vec<_> = spans.iter().filter(|s| !s.attrs.is_default()).collect();
        assert_eq!(styled[0].range.location, 0);
        assert_eq!(styled[1].range.location, 2);
    }
}

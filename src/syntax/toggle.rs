//! Inline style toggling
//!
//! Toggling works by substring inspection alone, no parser: a selection
//! is either exactly a wrapped span, nested inside a wider wrapped span,
//! or unstyled. The first two unwrap, the last wraps. Repeated toggles
//! round-trip losslessly.

use std::ops::Range;

use super::markers::InlineStyle;
use crate::range::{self, TextRange};

/// Result of a toggle: the rewritten buffer and the selection to restore
/// in the host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub text: String,
    pub selection: TextRange,
}

/// Toggle `style` over `selection` in `text`.
///
/// The selection is in UTF-16 code units. A selection starting past the
/// end of the buffer, or one whose offsets split a surrogate pair,
/// returns the input unchanged; a selection running past the end is
/// clamped to the buffer end.
pub fn toggle(style: InlineStyle, text: &str, selection: TextRange) -> ToggleOutcome {
    let total = range::utf16_len(text);
    if selection.location > total {
        return ToggleOutcome {
            text: text.to_string(),
            selection,
        };
    }
    let selection = TextRange::new(
        selection.location,
        selection.length.min(total - selection.location),
    );
    let Some(bytes) = range::byte_range(text, selection) else {
        return ToggleOutcome {
            text: text.to_string(),
            selection,
        };
    };

    let open = style.marker();
    let close = style.closing_marker();
    let selected = &text[bytes.clone()];

    // The selection is already exactly the wrapped span: strip the
    // markers. The length guard keeps a lone "*" from matching as both
    // opener and closer.
    if selected.len() >= open.len() + close.len()
        && selected.starts_with(open)
        && selected.ends_with(close)
    {
        let inner = &selected[open.len()..selected.len() - close.len()];
        return ToggleOutcome {
            text: splice(text, bytes.clone(), inner),
            selection: TextRange::new(selection.location, range::utf16_len(inner)),
        };
    }

    // The selection sits inside a wrapped span whose markers were not
    // selected: unwrap the nearest enclosing pair.
    if let Some(span) = surrounding_span(text, &bytes, open, close) {
        let inner = &text[span.start + open.len()..span.end - close.len()];
        let location = range::utf16_offset(text, span.start);
        return ToggleOutcome {
            text: splice(text, span.clone(), inner),
            selection: TextRange::new(location, range::utf16_len(inner)),
        };
    }

    // No style detected: apply it.
    let wrapped = format!("{open}{selected}{close}");
    let new_text = splice(text, bytes, &wrapped);

    // Markers are ASCII, so their byte length is their UTF-16 length.
    let new_selection = if selection.is_caret() {
        // Leave the caret between the fresh markers so typing lands
        // inside the pair
        TextRange::caret(selection.location + open.len())
    } else {
        // Select the whole decorated span so the next toggle reverses
        // this one
        TextRange::new(selection.location, selection.length + open.len() + close.len())
    };
    ToggleOutcome {
        text: new_text,
        selection: new_selection,
    }
}

/// Replace `bytes` in `text` with `insert`
fn splice(text: &str, bytes: Range<usize>, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() - bytes.len() + insert.len());
    out.push_str(&text[..bytes.start]);
    out.push_str(insert);
    out.push_str(&text[bytes.end..]);
    out
}

/// Find the nearest pair enclosing (but not included in) the selection:
/// the last occurrence of `open` ending at or before the selection start
/// and the first occurrence of `close` starting at or after the selection
/// end. Preferring the nearest occurrences keeps the unwrapped span
/// minimal. Returns the byte range of the full span, markers included,
/// or `None` unless both markers are found.
fn surrounding_span(
    text: &str,
    selection: &Range<usize>,
    open: &str,
    close: &str,
) -> Option<Range<usize>> {
    let open_start = text[..selection.start].rfind(open)?;
    let close_start = selection.end + text[selection.end..].find(close)?;
    Some(open_start..close_start + close.len())
}

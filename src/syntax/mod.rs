//! Inline styling subsystem
//!
//! The two engines at the heart of the editor:
//! - style toggling: wrap, unwrap, or nested-unwrap a marker pair around
//!   the current selection
//! - tokenization: re-derive visual attribute spans from the raw text
//!
//! Both are pure functions over a buffer and a UTF-16 selection range;
//! the host re-tokenizes after every toggle and every raw keystroke.

mod markers;
mod patterns;
mod style;
mod toggle;
mod tokenizer;

pub use markers::InlineStyle;
pub use patterns::{highlight_rules, HighlightRule};
pub use style::{ColorToken, FontSlant, FontWeight, StyledSpan, TextAttributes};
pub use toggle::{toggle, ToggleOutcome};
pub use tokenizer::{attributes_at, tokenize, tokenize_with, SpanScope};

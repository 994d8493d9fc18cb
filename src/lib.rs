//! sidenote - the markdown styling core of a notes editor
//!
//! A notes app stores its documents as plain text with lightweight
//! inline markers: `*bold*`, `_italic_`, `-struck-`, `<u>underlined</u>`,
//! `# headings`, and `![image](references)`. This crate is the engine
//! behind that format: toggling a style over the current selection and
//! re-deriving visual attribute spans from the raw text after every
//! edit. The host owns the text widget, persistence, and rendering; the
//! engine owns the text semantics.
//!
//! All ranges crossing the host boundary are UTF-16 code units, so
//! selections round-trip bit-compatibly through native text APIs.

pub mod config;
pub mod editor;
pub mod error;
pub mod range;
pub mod syntax;
pub mod theme;

pub use config::EditorConfig;
pub use editor::EditorSession;
pub use error::{EditorError, Result};
pub use range::TextRange;
pub use syntax::{
    attributes_at, tokenize, tokenize_with, toggle, ColorToken, FontSlant, FontWeight,
    InlineStyle, SpanScope, StyledSpan, TextAttributes, ToggleOutcome,
};
pub use theme::{Rgb, Theme};

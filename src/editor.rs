//! Editor session state
//!
//! Owns the authoritative buffer and selection for one open document.
//! The host pushes toggle requests and raw edits through here; after
//! every change the tokenizer re-runs and [`EditorSession::spans`]
//! reflects the new buffer. The session is synchronous and single-caret;
//! serializing calls against it is the host's job.

use std::ops::Range;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::range::{self, TextRange};
use crate::syntax::{self, InlineStyle, StyledSpan};

/// State for one open document
pub struct EditorSession {
    /// The document text, markers and all (this is the persisted format)
    text: String,
    /// Current selection, kept valid against `text`
    selection: TextRange,
    /// Settings controlling the tokenizer
    config: EditorConfig,
    /// Styled spans for the current text
    spans: Vec<StyledSpan>,
}

impl EditorSession {
    /// Create an empty session with default settings
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an empty session with the given settings
    pub fn with_config(config: EditorConfig) -> Self {
        let mut session = Self {
            text: String::new(),
            selection: TextRange::caret(0),
            config,
            spans: Vec::new(),
        };
        session.retokenize();
        session
    }

    /// Create a session over existing document text. The caret starts at
    /// the end, ready for appending.
    pub fn open(text: impl Into<String>, config: EditorConfig) -> Self {
        let mut session = Self::with_config(config);
        session.set_text(text);
        session
    }

    /// The document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current selection
    pub fn selection(&self) -> TextRange {
        self.selection
    }

    /// Styled spans for the host's display layer
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Replace the whole buffer (switching documents). The caret moves
    /// to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = TextRange::caret(range::utf16_len(&self.text));
        self.retokenize();
    }

    /// Move the selection, clamping it into the buffer
    pub fn set_selection(&mut self, selection: TextRange) {
        let total = range::utf16_len(&self.text);
        let location = selection.location.min(total);
        let length = selection.length.min(total - location);
        self.selection = TextRange::new(location, length);
    }

    /// Toggle an inline style over the current selection
    pub fn toggle_style(&mut self, style: InlineStyle) {
        let outcome = syntax::toggle(style, &self.text, self.selection);
        self.text = outcome.text;
        self.selection = outcome.selection;
        self.retokenize();
    }

    /// Replace the current selection (the raw-keystroke path), leaving
    /// the caret after the insertion
    pub fn replace_selection(&mut self, insert: &str) {
        // The session keeps its own selection valid, so this resolves
        if let Some(bytes) = range::byte_range(&self.text, self.selection) {
            let location = self.selection.location;
            self.splice(bytes, location, insert);
        }
    }

    /// Splice `insert` over an arbitrary range. Errors when the range is
    /// not a valid window into the buffer.
    pub fn replace_range(&mut self, target: TextRange, insert: &str) -> Result<()> {
        match range::byte_range(&self.text, target) {
            Some(bytes) => {
                self.splice(bytes, target.location, insert);
                Ok(())
            }
            None => Err(EditorError::InvalidRange {
                location: target.location,
                length: target.length,
                buffer_len: range::utf16_len(&self.text),
            }),
        }
    }

    /// Insert an image reference at the current selection
    pub fn insert_image_tag(&mut self, alt: &str, target: &str) {
        self.replace_selection(&format!("![{alt}]({target})"));
    }

    /// Word count for the editor overlay
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    fn splice(&mut self, bytes: Range<usize>, location: usize, insert: &str) {
        self.text.replace_range(bytes, insert);
        self.selection = TextRange::caret(location + range::utf16_len(insert));
        self.retokenize();
    }

    fn retokenize(&mut self) {
        self.spans = if self.config.highlighting {
            syntax::tokenize_with(&self.text, self.config.span_scope)
        } else {
            Vec::new()
        };
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

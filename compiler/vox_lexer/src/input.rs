//! Mutable scan state for one tokenization run.

use vox_chars::{decode_one_character, CharSeq};

use crate::Diagnostic;

/// Cursor over preprocessed text, owned by exactly one run.
///
/// Tracks the byte position, the 1-based line number, and the run's
/// diagnostics. Line advancement is the tokenizer's call (it knows which
/// characters are newlines); the cursor only stores the counter.
pub(crate) struct Input<'a> {
    source_name: &'a str,
    text: &'a [u8],
    pos: usize,
    line: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Input<'a> {
    pub(crate) fn new(source_name: &'a str, text: &'a [u8]) -> Self {
        Input {
            source_name,
            text,
            pos: 0,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// The character at the cursor; empty at end of input.
    pub(crate) fn peek(&self) -> CharSeq {
        decode_one_character(self.text, self.pos)
    }

    /// The character `n` characters past the cursor; empty when the
    /// input ends first.
    pub(crate) fn peek_nth(&self, n: usize) -> CharSeq {
        let mut pos = self.pos;
        for _ in 0..n {
            let ch = decode_one_character(self.text, pos);
            if ch.is_empty() {
                return ch;
            }
            pos += ch.len();
        }
        decode_one_character(self.text, pos)
    }

    pub(crate) fn advance(&mut self, ch: &CharSeq) {
        self.pos += ch.len();
    }

    pub(crate) fn note_newline(&mut self) {
        self.line += 1;
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(message, self.source_name, self.line));
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

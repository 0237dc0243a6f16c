//! Rough and clean token types.

use std::fmt;

use vox_chars::Language;

/// Stable handle to a token within one run's rough sequence.
///
/// Scope back-references use this index instead of addresses because the
/// sequence keeps growing while inner scopes are still open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    StartOfInput,
    OpenBlock,
    CloseBlock,
    SpaceRun,
    WordRun,
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::StartOfInput => "start-of-input",
            TokenKind::OpenBlock => "open-block",
            TokenKind::CloseBlock => "close-block",
            TokenKind::SpaceRun => "space-run",
            TokenKind::WordRun => "word-run",
            TokenKind::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A coarse lexical unit, prior to language-annotation resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoughToken {
    pub kind: TokenKind,
    /// Raw bytes of the token (one delimiter character, or a run).
    pub text: Vec<u8>,
    /// 1-based line the token starts on.
    pub line: u32,
    /// Newline characters inside a space run.
    pub newlines: u32,
    /// Bracket-escaped literal character inside a quote (`[[`, `]]`,
    /// `[X]`).
    pub is_literal_escape: bool,
    /// Whether the token sits inside a quoted region.
    pub in_quote: bool,
    /// The enclosing open-block token (or the start-of-input token at
    /// the top level).
    pub outer: TokenId,
}

impl RoughToken {
    pub(crate) fn new(kind: TokenKind, outer: TokenId, line: u32, in_quote: bool) -> Self {
        RoughToken {
            kind,
            text: Vec::new(),
            line,
            newlines: 0,
            is_literal_escape: false,
            in_quote,
            outer,
        }
    }
}

/// A rough token with its language-annotation context resolved.
///
/// Language-directive blocks themselves are consumed during cleaning and
/// never appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanToken {
    pub kind: TokenKind,
    pub text: Vec<u8>,
    pub line: u32,
    pub newlines: u32,
    pub is_literal_escape: bool,
    pub in_quote: bool,
    /// The language in effect at this point of the nesting scope; `None`
    /// before any annotation has been seen.
    pub language: Option<Language>,
}

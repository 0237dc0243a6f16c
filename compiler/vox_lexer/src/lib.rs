//! Lexical front end for Vox source text.
//!
//! Three passes over one input, strictly downstream:
//!
//! 1. [`preprocess`] — right-to-left escape-code substitution
//!    (`\ndash\` becomes the en-dash character).
//! 2. rough tokenization — recursive descent into coarse tokens
//!    (block delimiters, space runs, word runs) with structural-pairing
//!    validation and recovery.
//! 3. token cleaning — language-annotation directives (`[lat]`) are
//!    consumed and the active language is stamped onto the remaining
//!    tokens.
//!
//! The whole pipeline is a pure function of the input bytes and a
//! [`Registry`]; malformed input is reported through
//! [`Diagnostic`]s, never through failure. Runs over different inputs
//! share the registry freely and may execute in parallel.

mod clean;
mod diagnostic;
mod input;
mod preprocess;
mod rough;
mod token;

use std::path::{Path, PathBuf};

use thiserror::Error;
use vox_chars::Registry;

pub use diagnostic::Diagnostic;
pub use preprocess::preprocess;
pub use token::{CleanToken, RoughToken, TokenId, TokenKind};

/// Failure to obtain input bytes. Distinct from [`Diagnostic`]s: once
/// bytes are in hand, tokenization itself cannot fail.
#[derive(Debug, Error)]
pub enum LexInputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything one tokenization run produces.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<CleanToken>,
    /// The input after escape-code substitution, exposed so callers can
    /// persist or inspect it.
    pub preprocessed: Vec<u8>,
    /// In order encountered; empty means the input was well-formed.
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenize raw source bytes. `source_name` only labels diagnostics.
pub fn tokenize(registry: &Registry, source_name: &str, raw: &[u8]) -> LexOutput {
    let preprocessed = preprocess(registry, raw);
    tracing::debug!(
        source_name,
        raw = raw.len(),
        preprocessed = preprocessed.len(),
        "escape preprocessing done"
    );
    let (rough, diagnostics) =
        rough::RoughTokenizer::new(registry, source_name, &preprocessed).run();
    let tokens = clean::clean(&rough);
    tracing::debug!(
        source_name,
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "tokenization done"
    );
    LexOutput {
        tokens,
        preprocessed,
        diagnostics,
    }
}

/// Tokenize a file, labeling diagnostics with its path.
pub fn tokenize_file(registry: &Registry, path: impl AsRef<Path>) -> Result<LexOutput, LexInputError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| LexInputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source_name = path.display().to_string();
    Ok(tokenize(registry, &source_name, &raw))
}

//! Character registry for the Vox lexer.
//!
//! Vox source text is a stream of *logical characters*: one to six bytes
//! forming one character under the lexer's definition (UTF-8 sequences,
//! legacy single bytes, and CRLF as a single newline). The registry maps
//! each recognized character to:
//!
//! - a set of [`Characteristic`] tags (letter, digit, space, quote, ...),
//! - zero or more ASCII escape-code spellings (e.g. `\ndash\`),
//! - an optional natural-language tag ([`Language`]),
//! - an optional canonical look-alike ([equivalence](Registry::equivalent_of)),
//! - structural pairing rules (which closers may terminate an opener).
//!
//! The registry is built once from a fixed data set ([`Registry::standard`])
//! and is read-only thereafter; concurrent tokenization runs may share it
//! freely. A character with no entry is *non-interpretable* and is only
//! permitted verbatim inside quoted regions — that policy is enforced by
//! the tokenizer, not here.

mod char_seq;
mod characteristic;
mod decode;
mod error;
mod language;
mod registry;
mod standard;

pub use char_seq::CharSeq;
pub use characteristic::Characteristic;
pub use decode::decode_one_character;
pub use error::RegistryError;
pub use language::Language;
pub use registry::{Registry, RegistryBuilder};

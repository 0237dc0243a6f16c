//! Registry construction defects.

use thiserror::Error;

use crate::CharSeq;

/// Invariant violations in a registry's fixed data set.
///
/// These indicate a corrupt build of the character table, not bad user
/// input: malformed source text never produces a `RegistryError`. The
/// built-in table aborts the process on one of these; caller-supplied
/// tables (e.g. reduced test registries) get the error back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two distinct characters were given the same escape-code spelling.
    #[error("duplicate escape code `{code}`: already denotes {existing:?}, redefined for {duplicate:?}")]
    DuplicateCode {
        code: String,
        existing: CharSeq,
        duplicate: CharSeq,
    },

    /// A character was assigned two equivalence targets.
    #[error("duplicate equivalence for {seq:?}")]
    DuplicateEquivalence { seq: CharSeq },
}

//! Recoverable tokenization problems.

use std::fmt;

/// One problem found while tokenizing.
///
/// Malformed source text never aborts a run: structural mismatches are
/// repaired or skipped, non-interpretable characters are kept verbatim,
/// and each recovery leaves one of these behind. The caller decides
/// whether a non-empty list rejects the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub source_name: String,
    /// 1-based line the problem was found on.
    pub line: u32,
}

impl Diagnostic {
    pub(crate) fn new(message: impl Into<String>, source_name: &str, line: u32) -> Self {
        Diagnostic {
            message: message.into(),
            source_name: source_name.to_owned(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in file {}", self.message, self.source_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names_the_source() {
        let diag = Diagnostic::new("Unpaired closing character ')'", "intro.vox", 3);
        assert_eq!(
            diag.to_string(),
            "Unpaired closing character ')' in file intro.vox"
        );
        assert_eq!(diag.line, 3);
    }
}

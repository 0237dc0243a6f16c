//! Natural-language tags for letters and language annotations.

use std::fmt;

/// The closed set of language codes the lexer understands.
///
/// These appear in two places: as the language tag of registered letters
/// (`language_of`), and as the recognized codes of in-text language
/// annotations like `[lat]`. Script-neutral characters (digits,
/// punctuation) carry no language at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Literal text; suspends language-specific interpretation.
    Literal,
    Latin,
    Hebrew,
    Greek,
    Katakana,
}

impl Language {
    /// The annotation spelling, e.g. `lat` for `[lat]`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Literal => "lit",
            Language::Latin => "lat",
            Language::Hebrew => "heb",
            Language::Greek => "grk",
            Language::Katakana => "kat",
        }
    }

    /// Exact-match lookup of an annotation code.
    pub fn from_code(code: &[u8]) -> Option<Language> {
        match code {
            b"lit" => Some(Language::Literal),
            b"lat" => Some(Language::Latin),
            b"heb" => Some(Language::Hebrew),
            b"grk" => Some(Language::Greek),
            b"kat" => Some(Language::Katakana),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

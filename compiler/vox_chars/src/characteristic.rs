//! Lexical characteristics of a character.

use bitflags::bitflags;

bitflags! {
    /// A set of tags describing a character's lexical role.
    ///
    /// A character commonly carries several tags at once: `-` is
    /// `WORD | HYPHEN`, a newline is `NEW_LINE | SPACE`, the ASCII
    /// double quote is `QUOTE | OPEN_BLOCK | CLOSE_BLOCK |
    /// DISALLOWED_WITHIN_QUOTE`.
    ///
    /// `CLOSE_BLOCK` is only applied when it is an error for the
    /// character not to match a corresponding opener. The right single
    /// quote, for example, closes `‘ … ’` via the pairing table but is
    /// tagged `APOSTROPHE`, not `CLOSE_BLOCK`, because it also occurs
    /// as an ordinary apostrophe.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Characteristic: u32 {
        /// May be part of a word-run without forcing a break.
        const WORD = 1 << 0;
        /// Letter of some natural-language script.
        const LETTER = 1 << 1;
        const DIGIT = 1 << 2;
        /// Joins word chunks (`-` and its Unicode look-alikes).
        const HYPHEN = 1 << 3;
        /// Normally generates word breaks.
        const PUNCTUATION = 1 << 4;
        const FULLSTOP = 1 << 5;
        const COMMA = 1 << 6;
        const MIDDOT = 1 << 7;
        const COLON = 1 << 8;
        const SEMICOLON = 1 << 9;
        const VERTICAL_BAR = 1 << 10;
        /// Equivalent to `--` (figure dash, en dash).
        const NBAR = 1 << 11;
        /// Equivalent to `---` (em dash, horizontal bar).
        const MBAR = 1 << 12;
        const SPACE = 1 << 13;
        const NEW_LINE = 1 << 14;
        /// Formatting code (zero-width joiners, direction marks).
        const FORMAT = 1 << 15;
        const QUOTE = 1 << 16;
        const STRUCTURAL = 1 << 17;
        const APOSTROPHE = 1 << 18;
        const OPEN_BLOCK = 1 << 19;
        const CLOSE_BLOCK = 1 << 20;
        /// May not appear unescaped inside a quoted literal.
        const DISALLOWED_WITHIN_QUOTE = 1 << 21;
        /// May not open an outermost quote; nested sub-quotes only.
        const DISALLOWED_OUTSIDE_QUOTE = 1 << 22;
    }
}

//! Owned byte sequence for one logical character.

use std::borrow::Borrow;
use std::fmt;

use smallvec::SmallVec;

/// The canonical byte sequence of one logical character (1–6 bytes).
///
/// Most characters are at most four bytes (the UTF-8 maximum); the inline
/// capacity covers those without heap allocation. Legacy 5/6-byte forms
/// spill, which is fine — they only occur in malformed input.
///
/// `CharSeq` hashes and compares like its byte slice, so registry maps
/// keyed by `CharSeq` can be queried with a plain `&[u8]`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharSeq(SmallVec<[u8; 4]>);

impl CharSeq {
    /// The empty sequence, used as the end-of-input marker by the decoder.
    pub fn empty() -> Self {
        CharSeq(SmallVec::new())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        CharSeq(SmallVec::from_slice(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase base-16 rendering of the raw bytes, for diagnostics about
    /// characters that may not print legibly.
    pub fn byte_string(&self) -> String {
        let mut s = String::with_capacity(self.0.len() * 2);
        for b in &self.0 {
            s.push(hex_digit(b >> 4));
            s.push(hex_digit(b & 0x0f));
        }
        s
    }
}

fn hex_digit(nibble: u8) -> char {
    if nibble < 10 {
        (b'0' + nibble) as char
    } else {
        (b'a' + (nibble - 10)) as char
    }
}

impl Borrow<[u8]> for CharSeq {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for CharSeq {
    fn from(s: &str) -> Self {
        CharSeq::from_bytes(s.as_bytes())
    }
}

impl From<&[u8]> for CharSeq {
    fn from(bytes: &[u8]) -> Self {
        CharSeq::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for CharSeq {
    fn from(bytes: &[u8; N]) -> Self {
        CharSeq::from_bytes(bytes)
    }
}

impl PartialEq<[u8]> for CharSeq {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for CharSeq {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl fmt::Display for CharSeq {
    /// Lossy UTF-8 rendering; invalid bytes show as U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for CharSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharSeq({} [{}])", self, self.byte_string())
    }
}

//! Variable-width character decoding.

use crate::CharSeq;

/// Consume one logical character starting at `offset`.
///
/// Byte-length rule:
/// - values `<= 0x7F` are one byte, except CR immediately followed by LF,
///   which is one two-byte character (legacy line endings: any of CR, LF,
///   CRLF is a single newline character);
/// - `0x80–0xBF` (stray continuation, or a legacy single-byte encoding)
///   count as one byte;
/// - `0xC0–0xDF` declare 2 bytes, `0xE0–0xEF` 3, `0xF0–0xF7` 4,
///   `0xF8–0xFB` 5, `0xFC–0xFD` 6;
/// - anything else is an invalid single byte, returned as-is.
///
/// Continuation bytes are consumed only while they match `10xxxxxx` and
/// stay within the declared length and the input bounds, so truncated
/// sequences at end-of-input come back short instead of erroring.
///
/// Returns [`CharSeq::empty`] when `offset` is at or past the end.
pub fn decode_one_character(input: &[u8], offset: usize) -> CharSeq {
    let Some(&first) = input.get(offset) else {
        return CharSeq::empty();
    };

    let declared = match first {
        0x0d if input.get(offset + 1) == Some(&0x0a) => {
            return CharSeq::from_bytes(&input[offset..offset + 2]);
        }
        0x00..=0xbf => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        0xf8..=0xfb => 5,
        0xfc..=0xfd => 6,
        // 0xFE / 0xFF: invalid, but return the byte anyway.
        0xfe..=0xff => 1,
    };

    let mut end = offset + 1;
    while end < offset + declared && end < input.len() && input[end] & 0xc0 == 0x80 {
        end += 1;
    }
    CharSeq::from_bytes(&input[offset..end])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn decode(input: &[u8], offset: usize) -> Vec<u8> {
        decode_one_character(input, offset).as_bytes().to_vec()
    }

    #[test]
    fn ascii_is_one_byte() {
        assert_eq!(decode(b"abc", 0), b"a");
        assert_eq!(decode(b"abc", 2), b"c");
    }

    #[test]
    fn past_end_is_empty() {
        assert!(decode_one_character(b"a", 1).is_empty());
        assert!(decode_one_character(b"", 0).is_empty());
    }

    #[test]
    fn crlf_is_one_character() {
        assert_eq!(decode(b"\r\nx", 0), b"\r\n");
        // Lone CR stays a single byte.
        assert_eq!(decode(b"\rx", 0), b"\r");
        assert_eq!(decode(b"\r", 0), b"\r");
    }

    #[test]
    fn utf8_widths() {
        assert_eq!(decode("«x".as_bytes(), 0), "«".as_bytes()); // 2 bytes
        assert_eq!(decode("–x".as_bytes(), 0), "–".as_bytes()); // 3 bytes
        assert_eq!(decode("😀x".as_bytes(), 0), "😀".as_bytes()); // 4 bytes
    }

    #[test]
    fn stray_continuation_byte_is_one_byte() {
        assert_eq!(decode(&[0x80, b'a'], 0), [0x80]);
        assert_eq!(decode(&[0xbf], 0), [0xbf]);
    }

    #[test]
    fn truncated_sequence_returns_short() {
        // Declared 3 bytes, input ends after 2.
        assert_eq!(decode(&[0xe2, 0x80], 0), [0xe2, 0x80]);
        // Declared 2 bytes, next byte is not a continuation.
        assert_eq!(decode(&[0xc3, b'a'], 0), [0xc3]);
    }

    #[test]
    fn invalid_lead_bytes_come_back_as_is() {
        assert_eq!(decode(&[0xfe, 0x80], 0), [0xfe]);
        assert_eq!(decode(&[0xff], 0), [0xff]);
    }

    #[test]
    fn six_byte_legacy_form() {
        let bytes = [0xfd, 0x80, 0x80, 0x80, 0x80, 0x80];
        assert_eq!(decode(&bytes, 0), bytes);
    }

    proptest! {
        // Decoding never fails and never stalls: any non-empty input
        // yields a 1–6 byte prefix of itself.
        #[test]
        fn consumes_a_bounded_prefix(input in proptest::collection::vec(any::<u8>(), 1..16)) {
            let seq = decode_one_character(&input, 0);
            prop_assert!(!seq.is_empty());
            prop_assert!(seq.len() <= 6);
            prop_assert_eq!(seq.as_bytes(), &input[..seq.len()]);
        }
    }
}

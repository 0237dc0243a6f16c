//! Backslash escape-code substitution.

use memchr::memrchr;
use vox_chars::Registry;

const DELIMITER: u8 = b'\\';

/// Replace delimiter-bounded escape codes (`\ndash\`) with their
/// registered characters, leaving every other byte untouched.
///
/// The scan runs right to left: codes are delimiter-bounded on both
/// sides, so once a closing delimiter is fixed, each delimiter further
/// left is tried as the matching opener exactly once. Codes do not nest
/// or overlap, so a successful match settles the whole range and the
/// scan resumes to its left. A delimiter that fails to open a code stays
/// live as the potential *closer* of a code further left.
///
/// Only exact, case-sensitive spellings substitute; partial or unknown
/// codes pass through verbatim.
pub fn preprocess(registry: &Registry, input: &[u8]) -> Vec<u8> {
    // Built back to front, reversed once at the end.
    let mut out_rev: Vec<u8> = Vec::with_capacity(input.len());
    // One past the end of the not-yet-settled range.
    let mut range_end = input.len();
    // Where the hunt for the next delimiter stops (excludes a delimiter
    // that already failed as an opener).
    let mut search_end = range_end;

    while let Some(i) = memrchr(DELIMITER, &input[..search_end]) {
        let candidate = &input[i..range_end];
        if candidate.len() >= 2 && candidate[candidate.len() - 1] == DELIMITER {
            if let Some(ch) = std::str::from_utf8(candidate)
                .ok()
                .and_then(|code| registry.code_to_char(code))
            {
                out_rev.extend(ch.as_bytes().iter().rev());
                range_end = i;
                search_end = i;
                continue;
            }
        }
        // Not a code: everything after this delimiter is settled. The
        // delimiter itself may still close a code starting further left.
        out_rev.extend(input[i + 1..range_end].iter().rev());
        range_end = i + 1;
        search_end = i;
    }

    out_rev.extend(input[..range_end].iter().rev());
    out_rev.reverse();
    out_rev
}

//! The standard character table.
//!
//! One fixed data set, built once per process. Sections mirror the
//! reference character-set conventions: punctuation, hyphens and dashes,
//! word symbols, spaces, newlines, format codes, structural brackets,
//! apostrophes and primes, quotation marks, digits, and letters by
//! script. Letters carry a [`Language`] tag; capital Greek letters that
//! are visual look-alikes of Latin capitals are equivalenced to them so
//! classification and language candidates merge across scripts.

use std::sync::OnceLock;

use crate::{Characteristic as Ch, Language, Registry, RegistryError};

static STANDARD: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// The fixed process-wide table. Built eagerly on first use and
    /// shared by reference; safe for unsynchronized concurrent reads.
    ///
    /// # Panics
    ///
    /// Aborts on a construction defect (duplicate escape code or
    /// equivalence) — that is a corrupt build of this module's data, not
    /// bad user input, and the only case where this system halts.
    pub fn standard() -> &'static Registry {
        STANDARD.get_or_init(|| match build_standard() {
            Ok(registry) => registry,
            Err(err) => panic!("built-in character table is corrupt: {err}"),
        })
    }
}

/// Greek letters with their escape spellings. Case matters: `\Alpha\`
/// is the capital, `\alpha\` the small letter.
const GREEK_LETTERS: &[(&str, &str)] = &[
    ("Α", "\\Alpha\\"),
    ("Β", "\\Beta\\"),
    ("Γ", "\\Gamma\\"),
    ("Δ", "\\Delta\\"),
    ("Ε", "\\Epsilon\\"),
    ("Ζ", "\\Zeta\\"),
    ("Η", "\\Eta\\"),
    ("Θ", "\\Theta\\"),
    ("Ι", "\\Iota\\"),
    ("Κ", "\\Kappa\\"),
    ("Λ", "\\Lambda\\"),
    ("Μ", "\\Mu\\"),
    ("Ν", "\\Nu\\"),
    ("Ξ", "\\Xi\\"),
    ("Ο", "\\Omicron\\"),
    ("Π", "\\Pi\\"),
    ("Ρ", "\\Rho\\"),
    ("Σ", "\\Sigma\\"),
    ("Τ", "\\Tau\\"),
    ("Υ", "\\Upsilon\\"),
    ("Φ", "\\Phi\\"),
    ("Χ", "\\Chi\\"),
    ("Ψ", "\\Psi\\"),
    ("Ω", "\\Omega\\"),
    ("α", "\\alpha\\"),
    ("β", "\\beta\\"),
    ("γ", "\\gamma\\"),
    ("δ", "\\delta\\"),
    ("ε", "\\epsilon\\"),
    ("ζ", "\\zeta\\"),
    ("η", "\\eta\\"),
    ("θ", "\\theta\\"),
    ("ι", "\\iota\\"),
    ("κ", "\\kappa\\"),
    ("λ", "\\lambda\\"),
    ("μ", "\\mu\\"),
    ("ν", "\\nu\\"),
    ("ξ", "\\xi\\"),
    ("ο", "\\omicron\\"),
    ("π", "\\pi\\"),
    ("ρ", "\\rho\\"),
    ("ς", "\\finalsigma\\"),
    ("σ", "\\sigma\\"),
    ("τ", "\\tau\\"),
    ("υ", "\\upsilon\\"),
    ("φ", "\\phi\\"),
    ("χ", "\\chi\\"),
    ("ψ", "\\psi\\"),
    ("ω", "\\omega\\"),
];

/// Capital Greek letters that print identically to Latin capitals.
/// `(latin canonical, greek look-alike)`.
const GREEK_LATIN_LOOKALIKES: &[(&str, &str)] = &[
    ("A", "Α"),
    ("B", "Β"),
    ("E", "Ε"),
    ("Z", "Ζ"),
    ("H", "Η"),
    ("I", "Ι"),
    ("K", "Κ"),
    ("M", "Μ"),
    ("N", "Ν"),
    ("O", "Ο"),
    ("P", "Ρ"),
    ("T", "Τ"),
    ("Y", "Υ"),
    ("X", "Χ"),
];

/// Hebrew consonants, final forms included.
const HEBREW_LETTERS: &[(&str, &str)] = &[
    ("א", "\\alef\\"),
    ("ב", "\\bet\\"),
    ("ג", "\\gimel\\"),
    ("ד", "\\dalet\\"),
    ("ה", "\\he\\"),
    ("ו", "\\vav\\"),
    ("ז", "\\zayin\\"),
    ("ח", "\\het\\"),
    ("ט", "\\tet\\"),
    ("י", "\\yod\\"),
    ("ך", "\\finalkaf\\"),
    ("כ", "\\kaf\\"),
    ("ל", "\\lamed\\"),
    ("ם", "\\finalmem\\"),
    ("מ", "\\mem\\"),
    ("ן", "\\finalnun\\"),
    ("נ", "\\nun\\"),
    ("ס", "\\samekh\\"),
    ("ע", "\\ayin\\"),
    ("ף", "\\finalpe\\"),
    ("פ", "\\pe\\"),
    ("ץ", "\\finaltsadi\\"),
    ("צ", "\\tsadi\\"),
    ("ק", "\\qof\\"),
    ("ר", "\\resh\\"),
    ("ש", "\\shin\\"),
    ("ת", "\\tav\\"),
];

fn build_standard() -> Result<Registry, RegistryError> {
    let mut b = Registry::builder();

    // ─── Punctuation ────────────────────────────────────────────────
    b.set_characteristics(Ch::PUNCTUATION | Ch::FULLSTOP);
    b.add(".", &[])?;
    b.set_characteristics(Ch::PUNCTUATION | Ch::COMMA);
    b.add(",", &[])?;
    b.set_characteristics(Ch::PUNCTUATION | Ch::MIDDOT);
    b.add("·", &["\\middot\\"])?;
    b.set_characteristics(Ch::PUNCTUATION | Ch::COLON);
    b.add(":", &[])?;
    b.add("׃", &["\\sofpasuq\\"])?;
    b.set_characteristics(Ch::PUNCTUATION | Ch::SEMICOLON);
    b.add(";", &[])?;
    b.set_characteristics(Ch::PUNCTUATION | Ch::VERTICAL_BAR);
    b.add("|", &[])?;
    b.add("¦", &["\\brvbar\\"])?;

    // ─── Hyphens & dashes ───────────────────────────────────────────
    b.set_characteristics(Ch::WORD | Ch::HYPHEN);
    b.add("-", &[])?;
    b.add("\u{2010}", &["\\hyphen\\"])?;
    b.add("\u{2011}", &["\\nbhyphen\\"])?;
    b.set_characteristics(Ch::NBAR);
    b.add("\u{2012}", &["\\figdash\\"])?;
    b.add("\u{2013}", &["\\ndash\\", "\\endash\\"])?;
    b.set_characteristics(Ch::MBAR);
    b.add("\u{2014}", &["\\mdash\\", "\\emdash\\"])?;
    b.add("\u{2015}", &["\\hbar\\"])?;

    // ─── Word symbols ───────────────────────────────────────────────
    // These characters do not necessarily generate word breaks.
    b.set_characteristics(Ch::WORD);
    b.add("!", &["\\bang\\"])?;
    b.add("#", &[])?;
    b.add("$", &[])?;
    b.add("%", &["\\percent\\"])?;
    b.add("&", &["\\amp\\"])?;
    b.add("*", &["\\star\\"])?;
    b.add("+", &["\\plus\\"])?;
    b.add("/", &[])?;
    // The delimiter byte needs a delimiter-bounded spelling of its own:
    // an identity code here would let a closing `\` match as a one-byte
    // code and starve the opener to its left.
    b.add("\\", &["\\backslash\\"])?;
    b.add("<", &["\\lt\\"])?;
    b.add("=", &[])?;
    b.add(">", &["\\gt\\"])?;
    b.add("?", &[])?;
    b.add("@", &["\\at\\"])?;
    b.add("^", &[])?;
    b.add("_", &[])?;
    b.add("`", &[])?;
    b.add("~", &[])?;

    // ─── Spaces ─────────────────────────────────────────────────────
    b.set_characteristics(Ch::SPACE);
    b.add("\t", &["\\tab\\"])?;
    b.add(" ", &["\\space\\"])?;
    b.add(b"\xa0", &["\\windows-nbsp\\"])?;
    b.add("\u{a0}", &["\\nbsp\\"])?;
    b.add("\u{2000}", &["\\enquad\\"])?;
    b.add("\u{2001}", &["\\emquad\\"])?;
    b.add("\u{2002}", &["\\ensp\\"])?;
    b.add("\u{2003}", &["\\emsp\\"])?;
    b.add("\u{2004}", &["\\third-emsp\\"])?;
    b.add("\u{2005}", &["\\fourth-emsp\\"])?;
    b.add("\u{2006}", &["\\sixth-emsp\\"])?;
    b.add("\u{2007}", &["\\figsp\\"])?;
    b.add("\u{2008}", &["\\punctsp\\"])?;
    b.add("\u{2009}", &["\\thinsp\\"])?;
    b.add("\u{200a}", &["\\hairsp\\"])?;
    b.add("\u{202f}", &["\\nnbsp\\"])?;

    // ─── Newlines ───────────────────────────────────────────────────
    // Legacy line endings: any of CR, LF, CRLF is one newline.
    b.set_characteristics(Ch::NEW_LINE | Ch::SPACE);
    b.add("\n", &["\\newline\\"])?;
    b.add("\u{b}", &["\\vtab\\", "\\verticaltab\\"])?;
    b.add("\u{c}", &["\\formfeed\\"])?;
    b.add("\r", &["\\cr\\"])?;
    b.add("\r\n", &["\\crlf\\"])?;
    b.add("\u{85}", &["\\nextline\\"])?;
    b.add("\u{2028}", &["\\linesep\\"])?;
    b.add("\u{2029}", &["\\parsep\\"])?;

    // ─── Format codes ───────────────────────────────────────────────
    b.set_characteristics(Ch::WORD | Ch::FORMAT);
    b.add("\u{200b}", &["\\zwsp\\"])?;
    b.add("\u{200c}", &["\\zwnj\\"])?;
    b.add("\u{200d}", &["\\zwj\\"])?;
    b.add("\u{200e}", &["\\lrm\\"])?;
    b.add("\u{200f}", &["\\rlm\\"])?;

    // ─── Structural brackets ────────────────────────────────────────
    b.set_characteristics(Ch::OPEN_BLOCK | Ch::STRUCTURAL);
    b.add("(", &[])?;
    b.add("{", &[])?;
    b.add("[", &[])?;
    b.set_characteristics(Ch::CLOSE_BLOCK | Ch::STRUCTURAL);
    b.add(")", &[])?;
    b.add("}", &[])?;
    b.add("]", &[])?;
    b.pair("(", ")");
    b.pair("{", "}");
    b.pair("[", "]");

    // ─── Apostrophes & primes ───────────────────────────────────────
    // The right single quote doubles as the typographic apostrophe, so
    // it carries APOSTROPHE rather than CLOSE_BLOCK; it still closes
    // `‘ … ’` through the pairing table.
    b.set_characteristics(Ch::APOSTROPHE);
    b.add("'", &["\\apos-ascii\\"])?;
    b.add(b"\x92", &["\\apos-windows\\"])?;
    b.add("\u{2019}", &["\\'\\", "\\rsquo\\"])?;
    b.add("\u{2032}", &["\\prime\\"])?;
    b.add("\u{2033}", &["\\double-prime\\", "\\Prime\\"])?;
    b.add("\u{2034}", &["\\triple-prime\\"])?;
    b.add("\u{2057}", &["\\quadruple-prime\\"])?;

    // ─── Quotation marks ────────────────────────────────────────────
    b.set_characteristics(Ch::QUOTE | Ch::OPEN_BLOCK);
    b.add("«", &["\\<<\\", "\\laquo\\"])?;
    b.pair("«", "»");
    b.add("\u{201c}", &["\\``\\", "\\ldquo\\"])?;
    b.add("\u{201e}", &["\\,,\\", "\\bdquo\\"])?;
    b.pair("\u{201c}", "\u{201d}");
    b.pair("\u{201e}", "\u{201d}");
    b.pair("\u{201e}", "\u{201c}");
    b.add("\u{2018}", &["\\`\\", "\\lsquo\\"])?;
    b.pair("\u{2018}", "\u{2019}");
    b.add("《", &["\\cjk<<\\"])?;
    b.pair("《", "》");
    b.add("「", &["\\quoteL\\"])?;
    b.pair("「", "」");
    b.add("『", &["\\whiteL\\"])?;
    b.pair("『", "』");

    // The single-bottom quote looks like a comma and the single angle
    // marks are reserved outside quotations; all three may only form
    // nested sub-quotes.
    b.set_characteristics(Ch::QUOTE | Ch::OPEN_BLOCK | Ch::DISALLOWED_OUTSIDE_QUOTE);
    b.add("\u{201a}", &["\\,\\", "\\sbquo\\"])?;
    b.pair("\u{201a}", "\u{2018}");
    b.pair("\u{201a}", "\u{2019}");
    b.add("\u{2039}", &["\\<\\", "\\lsaquo\\"])?;
    b.pair("\u{2039}", "\u{203a}");
    b.add("〈", &["\\cjk<\\"])?;
    b.pair("〈", "〉");

    // The legacy ASCII double quote opens and closes with the same
    // mark and must be escaped inside any quote literal.
    b.set_characteristics(
        Ch::QUOTE | Ch::OPEN_BLOCK | Ch::CLOSE_BLOCK | Ch::DISALLOWED_WITHIN_QUOTE,
    );
    b.add("\"", &[])?;
    b.pair("\"", "\"");

    b.set_characteristics(Ch::QUOTE | Ch::CLOSE_BLOCK);
    b.add("»", &["\\>>\\", "\\raquo\\"])?;
    b.add("\u{201d}", &["\\''\\", "\\rdquo\\"])?;
    b.add("\u{203a}", &["\\>\\", "\\rsaquo\\"])?;
    b.add("〉", &["\\cjk>\\"])?;
    b.add("》", &["\\cjk>>\\"])?;
    b.add("」", &["\\quoteLstop\\"])?;
    b.add("』", &["\\whiteLstop\\"])?;

    // CJK angle quotes print like the guillemets they localize.
    b.set_equivalent("«", "《")?;
    b.set_equivalent("»", "》")?;
    b.set_equivalent("\u{2039}", "〈")?;
    b.set_equivalent("\u{203a}", "〉")?;

    // ─── Digits ─────────────────────────────────────────────────────
    b.set_characteristics(Ch::WORD | Ch::DIGIT);
    for digit in b'0'..=b'9' {
        b.add(&[digit], &[])?;
    }

    // ─── Latin letters ──────────────────────────────────────────────
    b.set_language(Some(Language::Latin));
    b.set_characteristics(Ch::WORD | Ch::LETTER);
    for letter in (b'A'..=b'Z').chain(b'a'..=b'z') {
        b.add(&[letter], &[])?;
    }

    // ─── Greek letters ──────────────────────────────────────────────
    b.set_language(Some(Language::Greek));
    for &(letter, spelling) in GREEK_LETTERS {
        b.add(letter, &[spelling])?;
    }
    for &(latin, greek) in GREEK_LATIN_LOOKALIKES {
        b.set_equivalent(latin, greek)?;
    }

    // ─── Hebrew letters ─────────────────────────────────────────────
    b.set_language(Some(Language::Hebrew));
    for &(letter, spelling) in HEBREW_LETTERS {
        b.add(letter, &[spelling])?;
    }

    Ok(b.finish())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::CharSeq;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_character_has_bidirectional_codes() {
        let r = Registry::standard();
        for seq in r.registered_characters() {
            let codes: Vec<&str> = r.codes_of(seq.as_bytes()).collect();
            assert!(!codes.is_empty(), "no codes for {seq:?}");
            for code in codes {
                assert_eq!(r.code_to_char(code), Some(seq), "code {code:?}");
            }
        }
    }

    #[test]
    fn dash_spellings() {
        let r = Registry::standard();
        let ndash = CharSeq::from("\u{2013}");
        assert_eq!(r.code_to_char("\\ndash\\"), Some(&ndash));
        assert_eq!(r.code_to_char("\\endash\\"), Some(&ndash));
        let codes: Vec<&str> = r.codes_of(ndash.as_bytes()).collect();
        assert_eq!(codes, ["\\ndash\\", "\\endash\\"]);
    }

    #[test]
    fn backslash_has_no_identity_code() {
        let r = Registry::standard();
        assert_eq!(r.code_to_char("\\"), None);
        let codes: Vec<&str> = r.codes_of(b"\\").collect();
        assert_eq!(codes, ["\\backslash\\"]);
    }

    #[test]
    fn quote_pairings() {
        let r = Registry::standard();
        let ldquo = "\u{201c}".as_bytes();
        let rdquo = "\u{201d}".as_bytes();
        let bdquo = "\u{201e}".as_bytes();
        assert!(r.is_pairing(ldquo, rdquo));
        assert!(r.is_pairing(bdquo, rdquo));
        assert!(r.is_pairing(bdquo, ldquo));
        assert!(!r.is_pairing(ldquo, bdquo));
        assert_eq!(r.default_closer(ldquo), Some(&CharSeq::from("\u{201d}")));
        assert!(r.is_pairing(b"\"", b"\""));
    }

    #[test]
    fn quote_usage_restrictions() {
        let r = Registry::standard();
        assert!(r.has_characteristic(
            "\u{201a}".as_bytes(),
            Ch::DISALLOWED_OUTSIDE_QUOTE
        ));
        assert!(r.has_characteristic(b"\"", Ch::DISALLOWED_WITHIN_QUOTE));
        // The typographic apostrophe closes ‘…’ but is not CLOSE_BLOCK.
        let rsquo = "\u{2019}".as_bytes();
        assert!(r.is_pairing("\u{2018}".as_bytes(), rsquo));
        assert!(!r.has_characteristic(rsquo, Ch::CLOSE_BLOCK));
        assert!(r.has_characteristic(rsquo, Ch::APOSTROPHE));
    }

    #[test]
    fn newline_forms() {
        let r = Registry::standard();
        for newline in [&b"\n"[..], b"\r", b"\r\n", "\u{2028}".as_bytes()] {
            assert!(r.has_characteristic(newline, Ch::NEW_LINE), "{newline:?}");
            assert!(r.has_characteristic(newline, Ch::SPACE));
        }
        assert!(!r.has_characteristic(b" ", Ch::NEW_LINE));
    }

    #[test]
    fn greek_capitals_merge_with_latin() {
        let r = Registry::standard();
        let alpha = "Α".as_bytes();
        assert_eq!(r.equivalent_of(alpha), CharSeq::from("A"));
        assert!(r.has_characteristic(alpha, Ch::LETTER));
        assert_eq!(
            r.possible_languages_of(alpha),
            [Language::Latin, Language::Greek]
        );
        // Small omega has no look-alike mapping.
        assert_eq!(r.possible_languages_of("ω".as_bytes()), [Language::Greek]);
    }

    #[test]
    fn cjk_quotes_are_guillemet_lookalikes() {
        let r = Registry::standard();
        assert_eq!(r.equivalent_of("《".as_bytes()), CharSeq::from("«"));
        assert!(r.has_characteristic("《".as_bytes(), Ch::OPEN_BLOCK));
    }

    #[test]
    fn legacy_single_bytes_are_registered() {
        let r = Registry::standard();
        assert!(r.is_registered(&[0xa0]));
        assert!(r.has_characteristic(&[0xa0], Ch::SPACE));
        assert!(r.is_registered(&[0x92]));
        assert!(r.has_characteristic(&[0x92], Ch::APOSTROPHE));
    }
}

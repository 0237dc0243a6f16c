//! Rough tokenization: recursive descent over preprocessed text.
//!
//! Produces a flat, append-only sequence of coarse tokens. Nesting is
//! expressed through each token's `outer` back-reference (a [`TokenId`]
//! index, stable under appends) rather than through the sequence shape,
//! so the cleaner can match closers to their openers without re-walking
//! the nesting.

use vox_chars::{CharSeq, Characteristic, Registry};

use crate::input::Input;
use crate::token::{RoughToken, TokenId, TokenKind};
use crate::Diagnostic;

/// Nesting deeper than this stops opening new scopes; the opener is
/// diagnosed and taken as word text instead, bounding recursion on
/// untrusted input.
pub(crate) const MAX_BLOCK_DEPTH: usize = 128;

pub(crate) struct RoughTokenizer<'a> {
    registry: &'a Registry,
    input: Input<'a>,
    tokens: Vec<RoughToken>,
}

impl<'a> RoughTokenizer<'a> {
    pub(crate) fn new(registry: &'a Registry, source_name: &'a str, text: &'a [u8]) -> Self {
        RoughTokenizer {
            registry,
            input: Input::new(source_name, text),
            tokens: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> (Vec<RoughToken>, Vec<Diagnostic>) {
        // A synthetic start-of-input token is the top-level scope. Its
        // empty opener never pairs with anything, so stray top-level
        // closers are reported instead of silently matched.
        let start = self.push(RoughToken::new(TokenKind::StartOfInput, TokenId(0), 1, false));
        self.scan_block(start, false, 0);
        let line = self.input.line();
        self.push(RoughToken::new(TokenKind::EndOfInput, start, line, false));
        (self.tokens, self.input.into_diagnostics())
    }

    fn push(&mut self, token: RoughToken) -> TokenId {
        let id = TokenId(self.tokens.len());
        self.tokens.push(token);
        id
    }

    /// Scan one scope until its closer or end of input.
    ///
    /// Dispatch order matters for symmetric delimiters like `"`: a
    /// character that closes the *current* opener closes it, and only
    /// otherwise is it considered as a new opener.
    fn scan_block(&mut self, scope: TokenId, in_quote: bool, depth: usize) {
        let opener = self.tokens[scope.0].text.clone();
        loop {
            let ch = self.input.peek();
            if ch.is_empty() {
                if self.tokens[scope.0].kind == TokenKind::OpenBlock {
                    self.repair_unclosed(scope, &opener, in_quote);
                }
                return;
            }
            let tags = self.registry.classify(ch.as_bytes());

            if in_quote {
                if let Some(literal) = self.match_literal_escape(&ch) {
                    let line = self.input.line();
                    let mut token = RoughToken::new(TokenKind::WordRun, scope, line, in_quote);
                    token.text = literal.as_bytes().to_vec();
                    token.is_literal_escape = true;
                    self.push(token);
                    continue;
                }
            }

            if self.registry.is_pairing(&opener, ch.as_bytes()) {
                let line = self.input.line();
                let mut token = RoughToken::new(TokenKind::CloseBlock, scope, line, in_quote);
                token.text = ch.as_bytes().to_vec();
                self.push(token);
                self.input.advance(&ch);
                return;
            }

            if !in_quote && tags.contains(Characteristic::DISALLOWED_OUTSIDE_QUOTE) {
                self.input
                    .error(format!("Quote character '{ch}' disallowed outside a quote"));
                self.input.advance(&ch);
                continue;
            }
            if in_quote && tags.contains(Characteristic::DISALLOWED_WITHIN_QUOTE) {
                self.input
                    .error(format!("Quote character '{ch}' disallowed within a quote"));
                self.input.advance(&ch);
                continue;
            }

            if tags.contains(Characteristic::OPEN_BLOCK) {
                if depth >= MAX_BLOCK_DEPTH {
                    self.input
                        .error(format!("Block nesting deeper than {MAX_BLOCK_DEPTH} levels"));
                    let line = self.input.line();
                    let mut token = RoughToken::new(TokenKind::WordRun, scope, line, in_quote);
                    token.text = ch.as_bytes().to_vec();
                    self.push(token);
                    self.input.advance(&ch);
                    continue;
                }
                let line = self.input.line();
                let mut token = RoughToken::new(TokenKind::OpenBlock, scope, line, in_quote);
                token.text = ch.as_bytes().to_vec();
                let id = self.push(token);
                self.input.advance(&ch);
                let nested_quote = in_quote || tags.contains(Characteristic::QUOTE);
                self.scan_block(id, nested_quote, depth + 1);
                continue;
            }

            if tags.contains(Characteristic::CLOSE_BLOCK) {
                // Recovery stays in the same scope; a closer only ever
                // closes the innermost scope.
                self.input
                    .error(format!("Unpaired closing character '{ch}'"));
                self.input.advance(&ch);
                continue;
            }

            if tags.contains(Characteristic::SPACE) {
                self.scan_space_run(scope, in_quote);
                continue;
            }

            self.scan_word_run(scope, in_quote, &opener);
        }
    }

    /// Literal escapes inside quotes: `[[` and `]]` are literal
    /// brackets, `[X]` is a literal quote/structural character `X`.
    /// Consumes the whole escape on a match.
    fn match_literal_escape(&mut self, ch: &CharSeq) -> Option<CharSeq> {
        if ch.as_bytes() == b"[" {
            let next = self.input.peek_nth(1);
            if next.as_bytes() == b"[" {
                self.advance_chars(2);
                return Some(CharSeq::from("["));
            }
            if self.input.peek_nth(2).as_bytes() == b"]"
                && self.registry.has_characteristic(
                    next.as_bytes(),
                    Characteristic::QUOTE | Characteristic::STRUCTURAL,
                )
            {
                self.advance_chars(3);
                return Some(next);
            }
        } else if ch.as_bytes() == b"]" && self.input.peek_nth(1).as_bytes() == b"]" {
            self.advance_chars(2);
            return Some(CharSeq::from("]"));
        }
        None
    }

    fn advance_chars(&mut self, n: usize) {
        for _ in 0..n {
            let ch = self.input.peek();
            self.input.advance(&ch);
        }
    }

    /// End of input inside an unclosed block: diagnose and synthesize
    /// the opener's default closer so downstream passes always see
    /// balanced scopes.
    fn repair_unclosed(&mut self, scope: TokenId, opener: &[u8], in_quote: bool) {
        self.input.error(format!(
            "Unpaired opening character '{}'",
            String::from_utf8_lossy(opener)
        ));
        let closer = self
            .registry
            .default_closer(opener)
            .map(|c| c.as_bytes().to_vec())
            .unwrap_or_default();
        let line = self.input.line();
        let mut token = RoughToken::new(TokenKind::CloseBlock, scope, line, in_quote);
        token.text = closer;
        self.push(token);
    }

    fn scan_space_run(&mut self, scope: TokenId, in_quote: bool) {
        let line = self.input.line();
        let mut token = RoughToken::new(TokenKind::SpaceRun, scope, line, in_quote);
        loop {
            let ch = self.input.peek();
            if ch.is_empty()
                || !self
                    .registry
                    .has_characteristic(ch.as_bytes(), Characteristic::SPACE)
            {
                break;
            }
            if self
                .registry
                .has_characteristic(ch.as_bytes(), Characteristic::NEW_LINE)
            {
                token.newlines += 1;
                self.input.note_newline();
            }
            token.text.extend_from_slice(ch.as_bytes());
            self.input.advance(&ch);
        }
        self.push(token);
    }

    /// Maximal run of ordinary characters. Inside a quote everything is
    /// accepted verbatim; outside, an unregistered character is
    /// diagnosed but still kept in the token text.
    fn scan_word_run(&mut self, scope: TokenId, in_quote: bool, opener: &[u8]) {
        let line = self.input.line();
        let mut token = RoughToken::new(TokenKind::WordRun, scope, line, in_quote);
        loop {
            let ch = self.input.peek();
            if ch.is_empty() {
                break;
            }
            let tags = self.registry.classify(ch.as_bytes());
            if tags.intersects(
                Characteristic::OPEN_BLOCK | Characteristic::CLOSE_BLOCK | Characteristic::SPACE,
            ) {
                break;
            }
            if self.registry.is_pairing(opener, ch.as_bytes()) {
                break;
            }
            if !in_quote && !self.registry.is_registered(ch.as_bytes()) {
                self.input.error(format!(
                    "Non-interpretable character 0x{} outside quote",
                    ch.byte_string()
                ));
            }
            token.text.extend_from_slice(ch.as_bytes());
            self.input.advance(&ch);
        }
        self.push(token);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> (Vec<RoughToken>, Vec<Diagnostic>) {
        RoughTokenizer::new(Registry::standard(), "test.vox", text.as_bytes()).run()
    }

    fn kinds(tokens: &[RoughToken]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[RoughToken]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| String::from_utf8_lossy(&t.text).into_owned())
            .collect()
    }

    #[test]
    fn words_spaces_and_blocks() {
        let (tokens, diagnostics) = scan("ab (cd)");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::StartOfInput,
                TokenKind::WordRun,
                TokenKind::SpaceRun,
                TokenKind::OpenBlock,
                TokenKind::WordRun,
                TokenKind::CloseBlock,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(texts(&tokens), ["", "ab", " ", "(", "cd", ")", ""]);
    }

    #[test]
    fn balanced_nesting_is_clean() {
        let (tokens, diagnostics) = scan("{a [b] (c)}");
        assert!(diagnostics.is_empty());
        let opens = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::OpenBlock)
            .count();
        let closes = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::CloseBlock)
            .count();
        assert_eq!(opens, 3);
        assert_eq!(opens, closes);
    }

    #[test]
    fn outer_references_identify_scopes() {
        let (tokens, _) = scan("a(b)c");
        // 0 start, 1 "a", 2 "(", 3 "b", 4 ")", 5 "c", 6 end.
        assert_eq!(tokens[1].outer, TokenId(0));
        assert_eq!(tokens[2].outer, TokenId(0));
        assert_eq!(tokens[3].outer, TokenId(2));
        assert_eq!(tokens[4].outer, TokenId(2));
        assert_eq!(tokens[5].outer, TokenId(0));
    }

    #[test]
    fn unclosed_opener_is_repaired() {
        let (tokens, diagnostics) = scan("(abc");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Unpaired opening character '('"));
        let close = &tokens[tokens.len() - 2];
        assert_eq!(close.kind, TokenKind::CloseBlock);
        assert_eq!(close.text, b")");
        assert_eq!(close.outer, TokenId(2));
    }

    #[test]
    fn stray_closer_is_skipped() {
        let (tokens, diagnostics) = scan(")abc");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Unpaired closing character ')'"));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::CloseBlock));
        assert_eq!(texts(&tokens), ["", "abc", ""]);
    }

    #[test]
    fn closer_for_an_outer_scope_does_not_pop_it() {
        // `]` inside `(` matches neither `(` nor any enclosing opener;
        // recovery skips it and keeps scanning the `(` scope.
        let (tokens, diagnostics) = scan("[(a]b)]");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("']'"));
        assert_eq!(texts(&tokens), ["", "[", "(", "a", "b", ")", "]", ""]);
    }

    #[test]
    fn space_runs_count_newlines() {
        let (tokens, diagnostics) = scan("a\n\nb");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[2].kind, TokenKind::SpaceRun);
        assert_eq!(tokens[2].newlines, 2);
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn crlf_is_one_newline() {
        let (tokens, _) = scan("a\r\nb");
        assert_eq!(tokens[2].newlines, 1);
        assert_eq!(tokens[3].line, 2);
    }

    #[test]
    fn quoted_scope_marks_tokens() {
        let (tokens, diagnostics) = scan("«ab»");
        assert!(diagnostics.is_empty());
        assert!(!tokens[1].in_quote); // the opener sits outside
        assert!(tokens[2].in_quote); // "ab"
        assert!(tokens[3].in_quote); // the closer
        assert_eq!(tokens[3].kind, TokenKind::CloseBlock);
    }

    #[test]
    fn symmetric_double_quote_closes_itself() {
        let (tokens, diagnostics) = scan("\"ab\"");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::StartOfInput,
                TokenKind::OpenBlock,
                TokenKind::WordRun,
                TokenKind::CloseBlock,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn apostrophe_closes_a_single_quote_scope() {
        // ’ is not CLOSE_BLOCK, but it pairs with ‘.
        let (tokens, diagnostics) = scan("\u{2018}ab\u{2019}");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[3].kind, TokenKind::CloseBlock);
        assert_eq!(tokens[3].text, "\u{2019}".as_bytes());
    }

    #[test]
    fn literal_bracket_escapes_inside_quotes() {
        let (tokens, diagnostics) = scan("«[[x]]»");
        assert!(diagnostics.is_empty());
        assert_eq!(texts(&tokens), ["", "«", "[", "x", "]", "»", ""]);
        assert!(tokens[2].is_literal_escape);
        assert!(tokens[4].is_literal_escape);
        assert_eq!(tokens[2].kind, TokenKind::WordRun);
    }

    #[test]
    fn literal_quote_escape_inside_quotes() {
        let (tokens, diagnostics) = scan("«[\"]»");
        assert!(diagnostics.is_empty());
        assert_eq!(texts(&tokens), ["", "«", "\"", "»", ""]);
        assert!(tokens[2].is_literal_escape);
    }

    #[test]
    fn sub_quote_opener_is_rejected_outside_quotes() {
        let (tokens, diagnostics) = scan("\u{201a}a");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("disallowed outside"));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::OpenBlock));
        assert_eq!(texts(&tokens), ["", "a", ""]);
    }

    #[test]
    fn sub_quote_opener_is_accepted_inside_quotes() {
        let (tokens, diagnostics) = scan("«\u{201a}a\u{2018}»");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[2].kind, TokenKind::OpenBlock);
        assert_eq!(tokens[4].kind, TokenKind::CloseBlock);
    }

    #[test]
    fn double_quote_is_rejected_inside_quotes() {
        let (tokens, diagnostics) = scan("«a\"b»");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("disallowed within"));
        assert_eq!(texts(&tokens), ["", "«", "a", "b", "»", ""]);
    }

    #[test]
    fn non_interpretable_outside_quote_is_kept_and_diagnosed() {
        let (tokens, diagnostics) = scan("a\u{0436}b");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Non-interpretable"));
        assert_eq!(texts(&tokens), ["", "a\u{0436}b", ""]);
    }

    #[test]
    fn non_interpretable_inside_quote_is_fine() {
        let (_, diagnostics) = scan("«\u{0436}»");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let text = "(".repeat(MAX_BLOCK_DEPTH + 8);
        let (tokens, diagnostics) = scan(&text);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("nesting deeper")));
        // The over-deep openers became word text instead of scopes.
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::WordRun && t.text == b"("));
    }
}

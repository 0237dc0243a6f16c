//! Token cleaning: language-annotation resolution.
//!
//! A second recursive pass over the rough sequence. Blocks of the shape
//! `[` *optional simple space* *language code* *optional simple space*
//! `]` are directives: they are consumed instead of emitted, and they
//! switch the active language for the rest of their scope. Every other
//! token passes through with the active language stamped on. Leaving a
//! scope restores the enclosing scope's language.

use vox_chars::Language;

use crate::token::{CleanToken, RoughToken, TokenId, TokenKind};

pub(crate) fn clean(rough: &[RoughToken]) -> Vec<CleanToken> {
    let mut cleaner = Cleaner {
        rough,
        out: Vec::with_capacity(rough.len()),
    };
    cleaner.clean_scope(0, None, None);
    cleaner.out
}

struct Cleaner<'a> {
    rough: &'a [RoughToken],
    out: Vec<CleanToken>,
}

impl Cleaner<'_> {
    /// Clean tokens from `start` until the closer of `scope` (or the end
    /// of the sequence, for the top level); returns the index after the
    /// last consumed token.
    fn clean_scope(
        &mut self,
        start: usize,
        scope: Option<TokenId>,
        mut language: Option<Language>,
    ) -> usize {
        let mut i = start;
        while i < self.rough.len() {
            let token = &self.rough[i];
            match token.kind {
                TokenKind::CloseBlock if Some(token.outer) == scope => {
                    self.emit(token, language);
                    return i + 1;
                }
                TokenKind::OpenBlock => {
                    if let Some((lang, next)) = self.match_annotation(i) {
                        language = Some(lang);
                        i = next;
                    } else {
                        self.emit(token, language);
                        i = self.clean_scope(i + 1, Some(TokenId(i)), language);
                    }
                }
                _ => {
                    self.emit(token, language);
                    i += 1;
                }
            }
        }
        i
    }

    fn emit(&mut self, token: &RoughToken, language: Option<Language>) {
        self.out.push(CleanToken {
            kind: token.kind,
            text: token.text.clone(),
            line: token.line,
            newlines: token.newlines,
            is_literal_escape: token.is_literal_escape,
            in_quote: token.in_quote,
            language,
        });
    }

    /// A directive block: plain `[`, optional non-newline space run, a
    /// recognized language code, optional non-newline space run, and the
    /// `]` that closes this very block.
    fn match_annotation(&self, open: usize) -> Option<(Language, usize)> {
        let opener = &self.rough[open];
        if opener.text != b"[" || opener.is_literal_escape {
            return None;
        }
        let mut i = open + 1;
        i += usize::from(self.is_simple_space(i));
        let code = self.rough.get(i)?;
        if code.kind != TokenKind::WordRun || code.is_literal_escape {
            return None;
        }
        let language = Language::from_code(&code.text)?;
        i += 1;
        i += usize::from(self.is_simple_space(i));
        let closer = self.rough.get(i)?;
        (closer.kind == TokenKind::CloseBlock
            && closer.outer == TokenId(open)
            && closer.text == b"]")
            .then_some((language, i + 1))
    }

    fn is_simple_space(&self, i: usize) -> bool {
        self.rough
            .get(i)
            .is_some_and(|t| t.kind == TokenKind::SpaceRun && t.newlines == 0)
    }
}

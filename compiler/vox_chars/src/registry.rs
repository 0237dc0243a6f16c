//! The character registry: classification, equivalence, escape codes,
//! and structural pairing.

use std::collections::BTreeMap;
use std::ops::Bound;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{CharSeq, Characteristic, Language, RegistryError};

/// Read-only character table, built once via [`RegistryBuilder`].
///
/// All lookups take a plain `&[u8]` holding one logical character's bytes
/// (as produced by [`decode_one_character`](crate::decode_one_character)).
/// Lookups on unregistered characters return empty sets, never errors.
///
/// The escape-code table is ordered (`BTreeMap`) because
/// [`may_prefix_a_code`](Registry::may_prefix_a_code) needs prefix-range
/// queries; every other table is hashed.
#[derive(Debug, Default)]
pub struct Registry {
    characteristics: FxHashMap<CharSeq, Characteristic>,
    /// look-alike -> canonical character.
    equivalence: FxHashMap<CharSeq, CharSeq>,
    /// canonical character -> all registered look-alikes.
    inverse_equivalence: FxHashMap<CharSeq, Vec<CharSeq>>,
    /// character -> its escape-code spellings, stored verbatim
    /// (delimiter-bounded like `\ndash\`, or the bare character itself
    /// for identity codes).
    codes: FxHashMap<CharSeq, SmallVec<[Box<str>; 2]>>,
    code_to_char: BTreeMap<Box<str>, CharSeq>,
    languages: FxHashMap<CharSeq, Language>,
    /// opener -> closers that may legally terminate its block, in
    /// registration order (the first is the repair default).
    closers: FxHashMap<CharSeq, SmallVec<[CharSeq; 2]>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Characteristics of `seq`, unioned with those of its equivalence
    /// target, if any. Unregistered characters return the empty set.
    pub fn classify(&self, seq: &[u8]) -> Characteristic {
        let mut tags = self.characteristics.get(seq).copied().unwrap_or_default();
        if let Some(canonical) = self.equivalence.get(seq) {
            tags |= self
                .characteristics
                .get(canonical.as_bytes())
                .copied()
                .unwrap_or_default();
        }
        tags
    }

    pub fn has_characteristic(&self, seq: &[u8], tag: Characteristic) -> bool {
        self.classify(seq).intersects(tag)
    }

    /// The canonical character `seq` is a look-alike of; identity if no
    /// mapping exists.
    pub fn equivalent_of(&self, seq: &[u8]) -> CharSeq {
        self.equivalence
            .get(seq)
            .cloned()
            .unwrap_or_else(|| CharSeq::from_bytes(seq))
    }

    /// Escape-code spellings registered for `seq`, in registration order.
    pub fn codes_of<'a>(&'a self, seq: &[u8]) -> impl Iterator<Item = &'a str> {
        self.codes
            .get(seq)
            .into_iter()
            .flatten()
            .map(AsRef::as_ref)
    }

    /// Exact-match inverse of [`codes_of`](Registry::codes_of).
    pub fn code_to_char(&self, code: &str) -> Option<&CharSeq> {
        self.code_to_char.get(code)
    }

    /// True if `partial` is a proper or exact prefix of some registered
    /// escape-code spelling.
    pub fn may_prefix_a_code(&self, partial: &str) -> bool {
        self.code_to_char
            .range::<str, _>((Bound::Included(partial), Bound::Unbounded))
            .next()
            .is_some_and(|(code, _)| code.starts_with(partial))
    }

    /// First registered closer for `opener`, used to repair unclosed
    /// blocks at end-of-input.
    pub fn default_closer(&self, opener: &[u8]) -> Option<&CharSeq> {
        self.closers.get(opener)?.first()
    }

    /// True if `closer` may legally terminate a block opened by `opener`.
    pub fn is_pairing(&self, opener: &[u8], closer: &[u8]) -> bool {
        self.closers
            .get(opener)
            .is_some_and(|set| set.iter().any(|c| c.as_bytes() == closer))
    }

    /// A character is registered if it has any code or characteristic.
    /// Unregistered characters are non-interpretable: permitted verbatim
    /// only inside quoted regions.
    pub fn is_registered(&self, seq: &[u8]) -> bool {
        self.codes.contains_key(seq) || self.characteristics.contains_key(seq)
    }

    /// Every registered character, in no particular order. This is the
    /// walk used by reference-table emitters; the tokenizer itself only
    /// does point lookups.
    pub fn registered_characters(&self) -> impl Iterator<Item = &CharSeq> {
        self.codes.keys().chain(
            self.characteristics
                .keys()
                .filter(|seq| !self.codes.contains_key(seq.as_bytes())),
        )
    }

    /// The character's own language tag; `None` for script-neutral
    /// characters.
    pub fn language_of(&self, seq: &[u8]) -> Option<Language> {
        self.languages.get(seq).copied()
    }

    /// Language candidates for `seq`, merged across its equivalence
    /// class: the canonical character's language plus the languages of
    /// every registered look-alike of that canonical character.
    pub fn possible_languages_of(&self, seq: &[u8]) -> Vec<Language> {
        let Some(canonical) = self.equivalence.get(seq) else {
            return self.language_of(seq).into_iter().collect();
        };
        let mut langs = Vec::new();
        let mut push = |lang: Option<&Language>| {
            if let Some(&lang) = lang {
                if !langs.contains(&lang) {
                    langs.push(lang);
                }
            }
        };
        push(self.languages.get(canonical.as_bytes()));
        if let Some(lookalikes) = self.inverse_equivalence.get(canonical.as_bytes()) {
            for seq in lookalikes {
                push(self.languages.get(seq.as_bytes()));
            }
        }
        langs
    }
}

/// Data-driven registry construction.
///
/// Entries are added under a "currently active" language/characteristic
/// context, set once and applied to all subsequent [`add`](RegistryBuilder::add)
/// calls — a convenience so the fixed table doesn't repeat parameters,
/// not behavior the tokenizer depends on.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
    active_language: Option<Language>,
    active_characteristics: Characteristic,
}

impl RegistryBuilder {
    /// Language applied to subsequent additions; `None` for
    /// script-neutral sections of the table.
    pub fn set_language(&mut self, language: Option<Language>) {
        self.active_language = language;
    }

    /// Characteristics applied to subsequent additions.
    pub fn set_characteristics(&mut self, tags: Characteristic) {
        self.active_characteristics = tags;
    }

    /// Register a character with the active context and the given escape
    /// spellings. With no explicit spelling the character becomes its own
    /// code, so `codes_of` is non-empty for every registered character.
    ///
    /// Spellings are globally unique; a collision is a build defect.
    pub fn add(
        &mut self,
        seq: impl Into<CharSeq>,
        spellings: &[&str],
    ) -> Result<(), RegistryError> {
        let seq = seq.into();
        if let Some(lang) = self.active_language {
            self.registry.languages.insert(seq.clone(), lang);
        }
        if !self.active_characteristics.is_empty() {
            *self.registry.characteristics.entry(seq.clone()).or_default() |=
                self.active_characteristics;
        }
        if spellings.is_empty() {
            let own = String::from_utf8_lossy(seq.as_bytes()).into_owned();
            self.add_code(&seq, &own)?;
        } else {
            for spelling in spellings {
                self.add_code(&seq, spelling)?;
            }
        }
        Ok(())
    }

    fn add_code(&mut self, seq: &CharSeq, code: &str) -> Result<(), RegistryError> {
        if let Some(existing) = self.registry.code_to_char.get(code) {
            return Err(RegistryError::DuplicateCode {
                code: code.to_owned(),
                existing: existing.clone(),
                duplicate: seq.clone(),
            });
        }
        self.registry.code_to_char.insert(code.into(), seq.clone());
        self.registry
            .codes
            .entry(seq.clone())
            .or_default()
            .push(code.into());
        Ok(())
    }

    /// Declare `lookalike` a visual equivalent of `canonical`. A
    /// character may have at most one canonical target.
    pub fn set_equivalent(
        &mut self,
        canonical: impl Into<CharSeq>,
        lookalike: impl Into<CharSeq>,
    ) -> Result<(), RegistryError> {
        let canonical = canonical.into();
        let lookalike = lookalike.into();
        if self.registry.equivalence.contains_key(lookalike.as_bytes()) {
            return Err(RegistryError::DuplicateEquivalence { seq: lookalike });
        }
        self.registry
            .inverse_equivalence
            .entry(canonical.clone())
            .or_default()
            .push(lookalike.clone());
        self.registry.equivalence.insert(lookalike, canonical);
        Ok(())
    }

    /// Add a structural pairing: `closer` may terminate a block opened
    /// by `opener`. The first closer registered for an opener becomes
    /// its repair default.
    pub fn pair(&mut self, opener: impl Into<CharSeq>, closer: impl Into<CharSeq>) {
        self.registry
            .closers
            .entry(opener.into())
            .or_default()
            .push(closer.into());
    }

    pub fn finish(self) -> Registry {
        self.registry
    }
}

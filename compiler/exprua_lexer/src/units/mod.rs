//! Unit word scanning and SI-prefix resolution.
//!
//! A *unit word* is a maximal run `[A-Za-z_µΩ...][A-Za-z0-9_µΩ...]*`, where
//! any alphabetic non-ASCII character is admitted so that `µ` and `Ω` work.
//! Whether the word is a unit is decided by [`LexTables::resolve_unit`]:
//!
//! 1. prefix + base: the first SI prefix (longest first) that the word starts
//!    with, leaving a non-empty remainder that is a base SI unit;
//! 2. whole word: the word itself is a base SI unit or another unit;
//! 3. otherwise the word is not a unit.
//!
//! The order resolves the classic ambiguities: `ms` is milli-second, `m` is
//! metre, `mol` is the mole (not `m` + `ol`) and `dam` is deca-metre.

use crate::{Cursor, LexTables};

/// How a unit word was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitReading<'w> {
    /// SI prefix, when the word is a prefixed base unit.
    pub prefix: Option<&'w str>,
    /// The unit symbol after the prefix (the whole word when unprefixed).
    pub base: &'w str,
}

#[inline]
fn is_unit_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && c.is_alphabetic())
}

#[inline]
fn is_unit_word_continue(c: char) -> bool {
    is_unit_word_start(c) || c.is_ascii_digit()
}

/// Byte length of the unit word at the cursor, or 0 if none starts there.
pub(crate) fn unit_word_len(cursor: Cursor<'_>) -> usize {
    let mut scan = cursor;
    match scan.current_char() {
        Some(c) if is_unit_word_start(c) => scan.eat_char_while(is_unit_word_continue),
        _ => 0,
    }
}

/// Returns `true` if `text` is exactly one unit word.
pub fn is_unit_word(text: &str) -> bool {
    !text.is_empty() && unit_word_len(Cursor::new(text)) == text.len()
}

impl LexTables {
    /// Decide whether `word` is a unit, and how it splits.
    pub fn resolve_unit<'w>(&self, word: &'w str) -> Option<UnitReading<'w>> {
        for prefix in self.si_prefixes() {
            if let Some(base) = word.strip_prefix(prefix) {
                if !base.is_empty() && self.is_base_unit(base) {
                    return Some(UnitReading {
                        prefix: Some(&word[..prefix.len()]),
                        base,
                    });
                }
            }
        }
        if self.is_base_unit(word) || self.is_other_unit(word) {
            return Some(UnitReading {
                prefix: None,
                base: word,
            });
        }
        None
    }

    /// Returns `true` if `word` resolves as a unit.
    #[inline]
    pub fn is_unit(&self, word: &str) -> bool {
        self.resolve_unit(word).is_some()
    }
}

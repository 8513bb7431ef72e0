//! Per-mode rule tables.
//!
//! Each mode owns an ordered slice of [`Rule`]s. The dispatcher tries them
//! top to bottom at the current offset and takes the first [`Step`] a rule
//! returns; order encodes precedence, there is no longest-match search.
//!
//! A matcher receives a [`Cursor`] copy positioned at the current offset and
//! the active [`LexTables`]. It returns:
//!
//! - `None` when the rule does not apply (the next rule is tried);
//! - a consuming `Step` with one or more pieces and a [`Transition`];
//! - a zero-width `Step` with [`Transition::Pop`] (rematch): the enclosing
//!   mode re-examines the same offset.

mod root;
mod string;
mod unit;

use smallvec::SmallVec;

use crate::{Cursor, LexTables, Mode, TokenKind, Transition};

/// Matcher function of a rule.
pub(crate) type Matcher = fn(Cursor<'_>, &LexTables) -> Option<Step>;

/// One entry in a mode's rule list.
pub(crate) enum Rule {
    /// Try `matcher` at the current offset.
    Match { name: &'static str, matcher: Matcher },
    /// Evaluate another mode's rules in place.
    Include(Mode),
}

impl Rule {
    pub(crate) const fn matcher(name: &'static str, matcher: Matcher) -> Rule {
        Rule::Match { name, matcher }
    }
}

/// A contiguous run of input classified as one token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Piece {
    pub kind: TokenKind,
    pub len: usize,
}

/// Outcome of a matching rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    /// Tokens to emit, in order. Empty for a rematch.
    pub pieces: SmallVec<[Piece; 3]>,
    pub transition: Transition,
}

impl Step {
    /// A single token of `len` bytes.
    pub(crate) fn token(kind: TokenKind, len: usize, transition: Transition) -> Step {
        let mut pieces = SmallVec::new();
        pieces.push(Piece { kind, len });
        Step { pieces, transition }
    }

    /// Several adjacent tokens; empty pieces are dropped.
    pub(crate) fn tokens(pieces: &[(TokenKind, usize)], transition: Transition) -> Step {
        Step {
            pieces: pieces
                .iter()
                .filter(|(_, len)| *len > 0)
                .map(|&(kind, len)| Piece { kind, len })
                .collect(),
            transition,
        }
    }

    /// Leave the current mode without consuming anything.
    pub(crate) fn rematch() -> Step {
        Step {
            pieces: SmallVec::new(),
            transition: Transition::Pop,
        }
    }

    /// Total bytes consumed.
    pub(crate) fn len(&self) -> usize {
        self.pieces.iter().map(|piece| piece.len).sum()
    }
}

/// The rule list of `mode`.
pub(crate) fn rules_for(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Root => root::RULES,
        Mode::Whitespace => WHITESPACE_RULES,
        Mode::StringDouble => string::DOUBLE_RULES,
        Mode::StringSingle => string::SINGLE_RULES,
        Mode::ExpectUnit => unit::EXPECT_UNIT_RULES,
        Mode::ExpectUnitAfterSpace => unit::EXPECT_UNIT_AFTER_SPACE_RULES,
        Mode::UnitExpression => unit::EXPRESSION_RULES,
        Mode::UnitExponent => unit::EXPONENT_RULES,
        Mode::UnitParenthesis => unit::PARENTHESIS_RULES,
    }
}

const WHITESPACE_RULES: &[Rule] = &[Rule::matcher("whitespace", whitespace)];

/// `[ \t\r\n]+`
fn whitespace(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = cursor.eat_while(is_whitespace_byte);
    (len > 0).then(|| Step::token(TokenKind::Whitespace, len, Transition::Stay))
}

#[inline]
pub(crate) fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes that make up operator/symbol runs.
#[inline]
pub(crate) fn is_symbol_byte(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'>'
            | b'<'
            | b'!'
            | b'~'
            | b'?'
            | b':'
            | b'&'
            | b'|'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'^'
            | b'%'
    )
}

/// Catch-all rule ending a sub-mode: hand the offset back to the parent.
fn rematch(_: Cursor<'_>, _: &LexTables) -> Option<Step> {
    Some(Step::rematch())
}

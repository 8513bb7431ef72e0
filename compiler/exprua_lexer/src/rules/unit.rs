//! Unit sub-grammar: unit detection after a number and compound unit
//! expressions (`kg*m/s^2`, `(kg*m)/s^2`, `s^-1`).
//!
//! Every mode here except `UnitParenthesis` ends in a catch-all rematch, so
//! anything that cannot continue the unit expression is handed back,
//! unconsumed, to whichever mode entered it. A unit group has no catch-all:
//! its frame stays until the matching `)`, and characters no group rule
//! accepts become `invalid` inside the group.

use super::{is_whitespace_byte, rematch, Rule, Step};
use crate::units::unit_word_len;
use crate::{BracketPair, Cursor, LexTables, Mode, TokenKind, Transition};

pub(crate) const EXPECT_UNIT_RULES: &[Rule] = &[
    Rule::matcher("unit-gap", gap),
    Rule::matcher("first-unit", first_unit),
    Rule::matcher("first-unit-group", first_group),
    Rule::matcher("no-unit", rematch),
];

pub(crate) const EXPECT_UNIT_AFTER_SPACE_RULES: &[Rule] = &[
    Rule::matcher("first-unit", first_unit),
    Rule::matcher("first-unit-group", first_group),
    Rule::matcher("no-unit", rematch),
];

pub(crate) const EXPRESSION_RULES: &[Rule] = &[
    Rule::matcher("unit-space", space),
    Rule::matcher("unit-product", product),
    Rule::matcher("unit-power", power),
    Rule::matcher("unit", unit),
    Rule::matcher("unit-group", group),
    Rule::matcher("end-of-units", rematch),
];

pub(crate) const EXPONENT_RULES: &[Rule] = &[
    Rule::matcher("exponent", exponent),
    Rule::matcher("unit-space", space),
    Rule::matcher("unit-product", product_after_power),
    Rule::matcher("end-of-exponent", rematch),
];

pub(crate) const PARENTHESIS_RULES: &[Rule] = &[
    Rule::matcher("group-space", group_space),
    Rule::matcher("group-word", group_word),
    Rule::matcher("unit-product", product),
    Rule::matcher("unit-power", power),
    Rule::matcher("nested-group", nested_group),
    Rule::matcher("group-close", group_close),
];

const PAREN: TokenKind = TokenKind::Bracket(BracketPair::Parenthesis);

/// Length of the unit at the cursor, if the word there resolves as one.
fn unit_len(cursor: Cursor<'_>, tables: &LexTables) -> Option<usize> {
    let len = unit_word_len(cursor);
    if len == 0 {
        return None;
    }
    tables.is_unit(&cursor.rest()[..len]).then_some(len)
}

/// Whether a `(` at the cursor starts a unit group: the first word inside,
/// past whitespace and further `(`, must be a unit.
fn opens_unit_group(cursor: Cursor<'_>, tables: &LexTables) -> bool {
    if cursor.current() != b'(' {
        return false;
    }
    let mut scan = cursor;
    loop {
        scan.eat_whitespace();
        if scan.current() != b'(' {
            break;
        }
        scan.advance();
    }
    unit_len(scan, tables).is_some()
}

// === Unit detection ===

/// Horizontal whitespace between a number and its unit.
fn gap(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = cursor.eat_whitespace();
    (len > 0).then(|| {
        Step::token(
            TokenKind::Whitespace,
            len,
            Transition::Replace(Mode::ExpectUnitAfterSpace),
        )
    })
}

fn first_unit(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let len = unit_len(cursor, tables)?;
    Some(Step::token(
        TokenKind::Unit,
        len,
        Transition::Replace(Mode::UnitExpression),
    ))
}

fn first_group(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    opens_unit_group(cursor, tables).then(|| {
        Step::token(
            PAREN,
            1,
            Transition::ReplaceThenPush(Mode::UnitExpression, Mode::UnitParenthesis),
        )
    })
}

// === Unit expressions ===

/// Horizontal whitespace, consumed before knowing whether the expression
/// continues: in `1 m + 2` the space before `+` is lexed in the unit mode.
fn space(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = cursor.eat_whitespace();
    (len > 0).then(|| Step::token(TokenKind::Whitespace, len, Transition::Stay))
}

#[inline]
fn is_product(cursor: Cursor<'_>) -> bool {
    matches!(cursor.current(), b'*' | b'/')
}

/// `*` or `/` between units.
fn product(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    is_product(cursor).then(|| Step::token(TokenKind::UnitOperator, 1, Transition::Stay))
}

/// `^`, followed by an exponent.
fn power(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    (cursor.current() == b'^').then(|| {
        Step::token(
            TokenKind::UnitOperator,
            1,
            Transition::Push(Mode::UnitExponent),
        )
    })
}

fn unit(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let len = unit_len(cursor, tables)?;
    Some(Step::token(TokenKind::Unit, len, Transition::Stay))
}

fn group(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    opens_unit_group(cursor, tables)
        .then(|| Step::token(PAREN, 1, Transition::Push(Mode::UnitParenthesis)))
}

// === Exponents ===

/// `[-+]?[0-9]+`
fn exponent(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let mut scan = cursor;
    if matches!(scan.current(), b'-' | b'+') {
        scan.advance();
    }
    let digits = scan.eat_while(|b| b.is_ascii_digit());
    (digits > 0).then(|| {
        Step::token(
            TokenKind::UnitExponentNumber,
            scan.pos() - cursor.pos(),
            Transition::Pop,
        )
    })
}

/// `*` or `/` straight after `^`: no exponent, keep chaining.
fn product_after_power(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    is_product(cursor).then(|| Step::token(TokenKind::UnitOperator, 1, Transition::Pop))
}

// === Unit groups ===

/// Any whitespace, newlines included: a group spans lines until its `)`.
fn group_space(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = cursor.eat_while(is_whitespace_byte);
    (len > 0).then(|| Step::token(TokenKind::Whitespace, len, Transition::Stay))
}

/// Inside a group, words that are not units stay identifiers.
fn group_word(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let len = unit_word_len(cursor);
    if len == 0 {
        return None;
    }
    let kind = if tables.is_unit(&cursor.rest()[..len]) {
        TokenKind::Unit
    } else {
        TokenKind::Identifier
    };
    Some(Step::token(kind, len, Transition::Stay))
}

fn nested_group(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    (cursor.current() == b'(')
        .then(|| Step::token(PAREN, 1, Transition::Push(Mode::UnitParenthesis)))
}

/// `)` closes the innermost group, returning to the frame that opened it.
fn group_close(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    (cursor.current() == b')').then(|| Step::token(PAREN, 1, Transition::Pop))
}

//! String modes. One rule set, instantiated per quote character.

use super::{rematch, Rule, Step};
use crate::{Cursor, LexTables, TokenKind, Transition};

pub(crate) const DOUBLE_RULES: &[Rule] = &rules::<b'"'>();
pub(crate) const SINGLE_RULES: &[Rule] = &rules::<b'\''>();

const fn rules<const QUOTE: u8>() -> [Rule; 5] {
    [
        Rule::matcher("string-content", content::<QUOTE>),
        Rule::matcher("string-escape", escape),
        Rule::matcher("string-close", close::<QUOTE>),
        Rule::matcher("string-dangling-escape", dangling_escape),
        Rule::matcher("string-end", rematch),
    ]
}

/// Run of characters other than `\`, the quote and newline.
fn content<const QUOTE: u8>(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = cursor.eat_while(|b| b != b'\\' && b != QUOTE && b != b'\n');
    (len > 0).then(|| Step::token(TokenKind::String, len, Transition::Stay))
}

/// `\` followed by any character on the same line.
fn escape(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    if cursor.current() != b'\\' {
        return None;
    }
    let start = cursor.pos();
    cursor.advance();
    if cursor.at_line_end() {
        return None;
    }
    cursor.advance_char();
    Some(Step::token(
        TokenKind::StringEscape,
        cursor.pos() - start,
        Transition::Stay,
    ))
}

fn close<const QUOTE: u8>(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    (cursor.current() == QUOTE).then(|| Step::token(TokenKind::StringQuote, 1, Transition::Pop))
}

/// A backslash with nothing left on its line: the string cannot close.
fn dangling_escape(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    (cursor.current() == b'\\')
        .then(|| Step::token(TokenKind::StringInvalid, 1, Transition::Pop))
}

//! Root mode: comments, numbers, words, strings and punctuation.

use super::{is_symbol_byte, is_whitespace_byte, Rule, Step};
use crate::units::unit_word_len;
use crate::{BracketPair, Cursor, LexTables, Mode, TokenKind, Transition};

pub(crate) const RULES: &[Rule] = &[
    Rule::matcher("comment", comment),
    Rule::matcher("number", number),
    Rule::matcher("function-declaration", function_declaration),
    Rule::matcher("function-call", function_call),
    Rule::matcher("identifier", identifier),
    Rule::Include(Mode::Whitespace),
    Rule::matcher("unterminated-string", unterminated_string),
    Rule::matcher("string-open", string_open),
    Rule::matcher("delimiter", delimiter),
    Rule::matcher("bracket", bracket),
    Rule::matcher("symbols", symbols),
];

/// `#` to end of line. The newline is left for the whitespace rule.
fn comment(mut cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    if cursor.current() != b'#' {
        return None;
    }
    let start = cursor.pos();
    cursor.eat_until_newline_or_eof();
    Some(Step::token(
        TokenKind::Comment,
        cursor.pos() - start,
        Transition::Stay,
    ))
}

/// Length of `[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?` at the start of `bytes`.
///
/// Follows regex backtracking: `1.` is the number `1` (the dot is left
/// over) and `1e` is the number `1`.
pub(crate) fn scan_number(bytes: &[u8]) -> Option<usize> {
    let digits_at = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_len = digits_at(0);
    let mut end = if bytes.get(int_len) == Some(&b'.') && digits_at(int_len + 1) > 0 {
        int_len + 1 + digits_at(int_len + 1)
    } else if int_len > 0 {
        int_len
    } else {
        return None;
    };

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_at(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    Some(end)
}

/// Numeric literal; a unit may follow.
fn number(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let len = scan_number(cursor.rest().as_bytes())?;
    Some(Step::token(
        TokenKind::Number,
        len,
        Transition::Push(Mode::ExpectUnit),
    ))
}

/// Length of `[a-zA-Z_][a-zA-Z0-9_]*` at the cursor, or 0.
fn identifier_len(cursor: Cursor<'_>) -> usize {
    let first = cursor.current();
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return 0;
    }
    let mut scan = cursor;
    scan.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `def` + whitespace + name.
fn function_declaration(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    if !cursor.rest().starts_with("def") {
        return None;
    }
    let mut scan = cursor;
    scan.advance_n(3);
    let space = scan.eat_while(is_whitespace_byte);
    if space == 0 {
        return None;
    }
    let name = identifier_len(scan);
    if name == 0 {
        return None;
    }
    Some(Step::tokens(
        &[
            (TokenKind::Keyword, 3),
            (TokenKind::Whitespace, space),
            (TokenKind::FunctionDeclaration, name),
        ],
        Transition::Stay,
    ))
}

/// Name + optional horizontal whitespace + `(`.
///
/// Keywords are left to the identifier rule so that `if (x)` keeps `if`
/// as a keyword.
fn function_call(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let name_len = identifier_len(cursor);
    if name_len == 0 {
        return None;
    }
    let name = &cursor.rest()[..name_len];
    if tables.is_keyword(name) {
        return None;
    }
    let mut scan = cursor;
    scan.advance_n(name_len);
    let space = scan.eat_whitespace();
    if scan.current() != b'(' {
        return None;
    }
    let kind = if tables.is_builtin(name) {
        TokenKind::Predefined
    } else {
        TokenKind::FunctionCall
    };
    Some(Step::tokens(
        &[
            (kind, name_len),
            (TokenKind::Whitespace, space),
            (TokenKind::Bracket(BracketPair::Parenthesis), 1),
        ],
        Transition::Stay,
    ))
}

/// Bare word: keyword, builtin, known unit, or identifier, in that order.
///
/// Known units are matched on the whole unit word, so non-ASCII entries
/// such as `Ω` are reachable; other words must be ASCII identifiers.
fn identifier(cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let len = identifier_len(cursor);
    let word = &cursor.rest()[..len];
    let unit_len = unit_word_len(cursor);
    let (kind, len) = if len > 0 && tables.is_keyword(word) {
        (TokenKind::Keyword, len)
    } else if len > 0 && tables.is_builtin(word) {
        (TokenKind::Predefined, len)
    } else if unit_len > 0 && tables.is_known_unit(&cursor.rest()[..unit_len]) {
        (TokenKind::Unit, unit_len)
    } else if len > 0 && tables.is_known_unit(word) {
        (TokenKind::Unit, len)
    } else if len > 0 {
        (TokenKind::Identifier, len)
    } else {
        return None;
    };
    Some(Step::token(kind, len, Transition::Stay))
}

/// Length of a string opened at the cursor that is not closed on its line.
///
/// Mirrors `"([^"\\]|\\.)*$`: escapes skip one non-newline character, and a
/// backslash right before the line end makes the pattern fail, so the
/// string mode deals with it instead.
fn unterminated_len(cursor: Cursor<'_>, quote: u8) -> Option<usize> {
    let start = cursor.pos();
    let mut scan = cursor;
    scan.advance();
    loop {
        if scan.at_line_end() {
            return Some(scan.pos() - start);
        }
        match scan.current() {
            b if b == quote => return None,
            b'\\' => {
                scan.advance();
                if scan.at_line_end() {
                    return None;
                }
                scan.advance_char();
            }
            _ => scan.advance_char(),
        }
    }
}

#[inline]
fn quote_at(cursor: Cursor<'_>) -> Option<u8> {
    matches!(cursor.current(), b'"' | b'\'').then(|| cursor.current())
}

/// A quote with no closing partner on the same line.
fn unterminated_string(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let quote = quote_at(cursor)?;
    let len = unterminated_len(cursor, quote)?;
    Some(Step::token(TokenKind::StringInvalid, len, Transition::Stay))
}

/// Opening quote of a string closed later on the line.
fn string_open(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let mode = match quote_at(cursor)? {
        b'"' => Mode::StringDouble,
        _ => Mode::StringSingle,
    };
    Some(Step::token(TokenKind::StringQuote, 1, Transition::Push(mode)))
}

/// `,`, `.` or `:`.
fn delimiter(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    matches!(cursor.current(), b',' | b'.' | b':')
        .then(|| Step::token(TokenKind::Delimiter, 1, Transition::Stay))
}

/// `{ } [ ] ( )`, tagged with the pair they belong to.
fn bracket(cursor: Cursor<'_>, _: &LexTables) -> Option<Step> {
    let pair = BracketPair::of(cursor.current())?;
    Some(Step::token(TokenKind::Bracket(pair), 1, Transition::Stay))
}

/// Maximal symbol run: an operator if listed, otherwise a symbol.
fn symbols(mut cursor: Cursor<'_>, tables: &LexTables) -> Option<Step> {
    let start = cursor.pos();
    let len = cursor.eat_while(is_symbol_byte);
    if len == 0 {
        return None;
    }
    let kind = if tables.is_operator(cursor.slice_from(start)) {
        TokenKind::Operator
    } else {
        TokenKind::Symbol
    };
    Some(Step::token(kind, len, Transition::Stay))
}

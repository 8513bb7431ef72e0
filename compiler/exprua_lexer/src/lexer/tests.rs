use super::*;
use crate::{tokenize, tokenize_with, BracketPair, Mode, Table};
use pretty_assertions::assert_eq;
use TokenKind as K;

const PAREN: TokenKind = K::Bracket(BracketPair::Parenthesis);

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).into_iter().map(|t| t.kind).collect()
}

fn pairs(src: &str) -> Vec<(TokenKind, &str)> {
    tokenize(src).into_iter().map(|t| (t.kind, t.text)).collect()
}

fn assert_covers(src: &str) {
    let tokens = tokenize(src);
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.span.start, offset, "gap before {token:?}");
        assert!(!token.text.is_empty(), "empty token {token:?}");
        assert_eq!(&src[token.span.to_range()], token.text);
        offset = token.span.end;
    }
    assert_eq!(offset, src.len());
}

// === Units after numbers ===

#[test]
fn prefixed_unit() {
    assert_eq!(kinds("1 ms"), [K::Number, K::Whitespace, K::Unit]);
    assert_eq!(pairs("1 ms")[2], (K::Unit, "ms"));
}

#[test]
fn bare_and_whole_word_units() {
    assert_eq!(pairs("1 m")[2], (K::Unit, "m"));
    assert_eq!(pairs("1 mol")[2], (K::Unit, "mol"));
    assert_eq!(pairs("1 dam")[2], (K::Unit, "dam"));
    assert_eq!(pairs("2min")[1], (K::Unit, "min"));
}

#[test]
fn non_ascii_units() {
    assert_eq!(pairs("5 µm")[2], (K::Unit, "µm"));
    assert_eq!(pairs("10 kΩ")[2], (K::Unit, "kΩ"));
}

#[test]
fn non_unit_word_falls_back() {
    assert_eq!(
        pairs("1 foo"),
        [(K::Number, "1"), (K::Whitespace, " "), (K::Identifier, "foo")]
    );
}

#[test]
fn compound_unit() {
    assert_eq!(
        pairs("9.8 m/s^2"),
        [
            (K::Number, "9.8"),
            (K::Whitespace, " "),
            (K::Unit, "m"),
            (K::UnitOperator, "/"),
            (K::Unit, "s"),
            (K::UnitOperator, "^"),
            (K::UnitExponentNumber, "2"),
        ]
    );
}

#[test]
fn negative_exponent() {
    assert_eq!(
        kinds("2 s^-1"),
        [K::Number, K::Whitespace, K::Unit, K::UnitOperator, K::UnitExponentNumber]
    );
}

#[test]
fn exponent_then_more_units() {
    assert_eq!(
        kinds("1 kg*m^2/s^2"),
        [
            K::Number,
            K::Whitespace,
            K::Unit,
            K::UnitOperator,
            K::Unit,
            K::UnitOperator,
            K::UnitExponentNumber,
            K::UnitOperator,
            K::Unit,
            K::UnitOperator,
            K::UnitExponentNumber,
        ]
    );
}

#[test]
fn grouped_unit_matches_flat_unit() {
    let grouped: Vec<_> = kinds("1 (kg*m)/s^2")
        .into_iter()
        .filter(|kind| *kind != PAREN)
        .collect();
    assert_eq!(grouped, kinds("1 kg*m/s^2"));
    assert_eq!(
        kinds("1 (kg*m)/s^2").iter().filter(|kind| **kind == PAREN).count(),
        2
    );
}

#[test]
fn group_close_returns_to_expression() {
    let mut lexer = Lexer::new("1 (m) + 2");
    let before: Vec<_> = lexer.by_ref().take(5).map(|t| t.kind).collect();
    assert_eq!(before, [K::Number, K::Whitespace, PAREN, K::Unit, PAREN]);
    assert_eq!(lexer.state().modes(), &[Mode::Root, Mode::UnitExpression]);
    let after: Vec<_> = lexer.map(|t| t.kind).collect();
    assert_eq!(after, [K::Whitespace, K::Operator, K::Whitespace, K::Number]);
}

#[test]
fn arithmetic_parenthesis_is_not_a_unit_group() {
    assert_eq!(
        kinds("2 (x + 1)"),
        [
            K::Number,
            K::Whitespace,
            PAREN,
            K::Identifier,
            K::Whitespace,
            K::Operator,
            K::Whitespace,
            K::Number,
            PAREN,
        ]
    );
}

#[test]
fn identifier_inside_unit_group() {
    assert_eq!(
        kinds("1 (m*x)"),
        [K::Number, K::Whitespace, PAREN, K::Unit, K::UnitOperator, K::Identifier, PAREN]
    );
}

#[test]
fn unclosed_group_leaves_frames() {
    let mut lexer = Lexer::new("1 (m");
    assert_eq!(lexer.by_ref().count(), 4);
    assert_eq!(
        lexer.state().modes(),
        &[Mode::Root, Mode::UnitExpression, Mode::UnitParenthesis]
    );
}

#[test]
fn unexpected_character_inside_group_keeps_the_group_open() {
    let mut lexer = Lexer::new("1 (kg*3)");
    let tokens: Vec<_> = lexer.by_ref().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        tokens,
        [
            (K::Number, "1"),
            (K::Whitespace, " "),
            (PAREN, "("),
            (K::Unit, "kg"),
            (K::UnitOperator, "*"),
            (K::Invalid, "3"),
            (PAREN, ")"),
        ]
    );
    assert_eq!(lexer.state().modes(), &[Mode::Root, Mode::UnitExpression]);
}

#[test]
fn group_close_is_lexed_in_the_group() {
    let mut lexer = Lexer::new("1 (kg - m)/s");
    let tokens: Vec<_> = lexer.by_ref().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        tokens,
        [
            (K::Number, "1"),
            (K::Whitespace, " "),
            (PAREN, "("),
            (K::Unit, "kg"),
            (K::Whitespace, " "),
            (K::Invalid, "-"),
            (K::Whitespace, " "),
            (K::Unit, "m"),
            (PAREN, ")"),
            (K::UnitOperator, "/"),
            (K::Unit, "s"),
        ]
    );
    assert_eq!(lexer.state().modes(), &[Mode::Root, Mode::UnitExpression]);
}

#[test]
fn group_spans_newlines() {
    assert_eq!(
        pairs("1 (kg\n*m)"),
        [
            (K::Number, "1"),
            (K::Whitespace, " "),
            (PAREN, "("),
            (K::Unit, "kg"),
            (K::Whitespace, "\n"),
            (K::UnitOperator, "*"),
            (K::Unit, "m"),
            (PAREN, ")"),
        ]
    );
}

#[test]
fn space_after_unit_is_lexed_in_unit_mode() {
    let mut lexer = Lexer::new("1 m + 2");
    let head: Vec<_> = lexer.by_ref().take(4).map(|t| t.kind).collect();
    assert_eq!(head, [K::Number, K::Whitespace, K::Unit, K::Whitespace]);
    assert_eq!(lexer.state().modes(), &[Mode::Root, Mode::UnitExpression]);
    let tail: Vec<_> = lexer.map(|t| (t.kind, t.text)).collect();
    assert_eq!(tail, [(K::Operator, "+"), (K::Whitespace, " "), (K::Number, "2")]);
}

#[test]
fn newline_ends_unit_context() {
    assert_eq!(pairs("5 ms")[2], (K::Unit, "ms"));
    assert_eq!(
        pairs("5\nms"),
        [(K::Number, "5"), (K::Whitespace, "\n"), (K::Identifier, "ms")]
    );
    assert_eq!(
        kinds("5 m\n* 2"),
        [
            K::Number,
            K::Whitespace,
            K::Unit,
            K::Whitespace,
            K::Operator,
            K::Whitespace,
            K::Number,
        ]
    );
}

#[test]
fn operator_after_number_is_not_a_unit_operator() {
    assert_eq!(
        kinds("4 * 2"),
        [K::Number, K::Whitespace, K::Operator, K::Whitespace, K::Number]
    );
}

#[test]
fn bare_known_unit_in_root() {
    assert_eq!(kinds("kg"), [K::Unit]);
    assert_eq!(kinds("ms"), [K::Identifier]);
}

#[test]
fn bare_non_ascii_known_unit_in_root() {
    assert_eq!(pairs("Ω"), [(K::Unit, "Ω")]);
    assert_eq!(
        pairs("R = Ω"),
        [
            (K::Identifier, "R"),
            (K::Whitespace, " "),
            (K::Operator, "="),
            (K::Whitespace, " "),
            (K::Unit, "Ω"),
        ]
    );
    assert_eq!(pairs("xΩ"), [(K::Identifier, "x"), (K::Unit, "Ω")]);
    assert_eq!(pairs("Ωx"), [(K::Invalid, "Ω"), (K::Identifier, "x")]);
}

// === Root words ===

#[test]
fn keyword_vs_identifier() {
    assert_eq!(kinds("for forest"), [K::Keyword, K::Whitespace, K::Identifier]);
}

#[test]
fn function_declaration() {
    assert_eq!(
        pairs("def area("),
        [
            (K::Keyword, "def"),
            (K::Whitespace, " "),
            (K::FunctionDeclaration, "area"),
            (PAREN, "("),
        ]
    );
}

#[test]
fn function_calls() {
    assert_eq!(
        kinds("area(5)"),
        [K::FunctionCall, PAREN, K::Number, PAREN]
    );
    assert_eq!(kinds("sin(5)"), [K::Predefined, PAREN, K::Number, PAREN]);
    assert_eq!(
        kinds("if (x)"),
        [K::Keyword, K::Whitespace, PAREN, K::Identifier, PAREN]
    );
}

#[test]
fn multi_token_step_is_buffered() {
    let mut lexer = Lexer::new("sqrt(2)");
    assert_eq!(lexer.next().map(|t| t.kind), Some(K::Predefined));
    // The whole call prefix was consumed in one step.
    assert_eq!(lexer.state().pos(), 5);
    assert_eq!(lexer.next().map(|t| t.kind), Some(PAREN));
}

#[test]
fn operators_and_symbols() {
    assert_eq!(
        pairs("a += b => c"),
        [
            (K::Identifier, "a"),
            (K::Whitespace, " "),
            (K::Operator, "+="),
            (K::Whitespace, " "),
            (K::Identifier, "b"),
            (K::Whitespace, " "),
            (K::Symbol, "=>"),
            (K::Whitespace, " "),
            (K::Identifier, "c"),
        ]
    );
}

#[test]
fn delimiters_and_brackets() {
    assert_eq!(
        kinds("[a, {b}]"),
        [
            K::Bracket(BracketPair::Square),
            K::Identifier,
            K::Delimiter,
            K::Whitespace,
            K::Bracket(BracketPair::Curly),
            K::Identifier,
            K::Bracket(BracketPair::Curly),
            K::Bracket(BracketPair::Square),
        ]
    );
}

#[test]
fn trailing_dot_is_a_delimiter() {
    assert_eq!(pairs("1."), [(K::Number, "1"), (K::Delimiter, ".")]);
}

#[test]
fn comment_stops_at_newline() {
    assert_eq!(
        pairs("# m/s\nx"),
        [
            (K::Comment, "# m/s"),
            (K::Whitespace, "\n"),
            (K::Identifier, "x"),
        ]
    );
}

// === Strings ===

#[test]
fn string_with_escape() {
    assert_eq!(
        pairs(r#"print("a\"b")"#),
        [
            (K::FunctionCall, "print"),
            (PAREN, "("),
            (K::StringQuote, "\""),
            (K::String, "a"),
            (K::StringEscape, "\\\""),
            (K::String, "b"),
            (K::StringQuote, "\""),
            (PAREN, ")"),
        ]
    );
}

#[test]
fn single_quoted_string() {
    assert_eq!(
        kinds("'it''s'"),
        [
            K::StringQuote,
            K::String,
            K::StringQuote,
            K::StringQuote,
            K::String,
            K::StringQuote,
        ]
    );
}

#[test]
fn unterminated_string() {
    assert_eq!(
        pairs("x = \"abc\ny"),
        [
            (K::Identifier, "x"),
            (K::Whitespace, " "),
            (K::Operator, "="),
            (K::Whitespace, " "),
            (K::StringInvalid, "\"abc"),
            (K::Whitespace, "\n"),
            (K::Identifier, "y"),
        ]
    );
}

#[test]
fn dangling_escape_closes_the_string() {
    assert_eq!(
        pairs("\"ab\\\nx"),
        [
            (K::StringQuote, "\""),
            (K::String, "ab"),
            (K::StringInvalid, "\\"),
            (K::Whitespace, "\n"),
            (K::Identifier, "x"),
        ]
    );
}

// === Recovery ===

#[test]
fn invalid_characters() {
    assert_eq!(pairs("a @ €"), [
        (K::Identifier, "a"),
        (K::Whitespace, " "),
        (K::Invalid, "@"),
        (K::Whitespace, " "),
        (K::Invalid, "€"),
    ]);
}

#[test]
fn empty_input() {
    assert!(tokenize("").is_empty());
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.state().pos(), 0);
}

#[test]
fn fused_after_end() {
    let mut lexer = Lexer::new("x");
    assert!(lexer.next().is_some());
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn cloned_lexer_forks_the_stream() {
    let mut lexer = Lexer::new("g = 9.81 m/s^2");
    lexer.by_ref().take(5).for_each(drop);
    let fork = lexer.clone();
    assert_eq!(fork.collect::<Vec<_>>(), lexer.collect::<Vec<_>>());
}

// === Tables ===

#[test]
fn custom_unit_is_recognized() {
    assert_eq!(pairs("3 eV")[2], (K::Identifier, "eV"));
    let tables = LexTables::builder().add(Table::OtherUnits, ["eV"]).build();
    let tokens = tokenize_with("3 eV", &tables);
    assert_eq!(tokens[2].kind, K::Unit);
}

#[test]
fn custom_keyword_blocks_function_call() {
    let tables = LexTables::builder().add(Table::Keywords, ["print"]).build();
    let tokens: Vec<_> = Lexer::with_tables("print(1)", &tables)
        .map(|t| t.kind)
        .collect();
    assert_eq!(tokens[0], K::Keyword);
    assert_eq!(tokens[1], PAREN);
}

// === Sample program ===

const KEPLER: &str = "
# Calculate Jupiter's orbital period using Kepler's Third Law
def calculate_orbital_period(semi_major_axis, central_mass):
    four_pi_squared = 4 * pi^2
    GM = G * central_mass
    r_cubed = semi_major_axis^3
    period_squared = (four_pi_squared / GM) * r_cubed
    return sqrt(period_squared)

M_sun = 1.989e30 kg
r_jupiter = 7.786e11 m
calculate_orbital_period(r_jupiter, M_sun)";

fn significant(src: &str) -> Vec<(TokenKind, &str)> {
    tokenize(src)
        .into_iter()
        .filter(|t| !matches!(t.kind, K::Whitespace | K::Comment))
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn sample_program_covers_input() {
    assert_covers(KEPLER);
    assert!(tokenize(KEPLER).iter().all(|t| t.kind != K::Invalid));
}

#[test]
fn sample_program_declaration_and_call() {
    let tokens = significant(KEPLER);
    let decl = tokens
        .iter()
        .position(|t| t.0 == K::FunctionDeclaration)
        .unwrap_or_else(|| panic!("no declaration"));
    assert_eq!(tokens[decl - 1], (K::Keyword, "def"));
    assert_eq!(tokens[decl].1, "calculate_orbital_period");
    assert!(tokens.contains(&(K::Predefined, "sqrt")));
    assert!(tokens.contains(&(K::Keyword, "return")));
    assert_eq!(
        tokens.last().map(|t| t.0),
        Some(PAREN),
    );
    assert!(tokens.contains(&(K::FunctionCall, "calculate_orbital_period")));
}

#[test]
fn sample_program_units() {
    let units: Vec<_> = significant(KEPLER)
        .into_iter()
        .filter(|t| t.0 == K::Unit)
        .map(|t| t.1)
        .collect();
    assert_eq!(units, ["kg", "m"]);
    assert_eq!(
        significant("M_sun = 1.989e30 kg"),
        [
            (K::Identifier, "M_sun"),
            (K::Operator, "="),
            (K::Number, "1.989e30"),
            (K::Unit, "kg"),
        ]
    );
}

#[test]
fn sample_program_arithmetic() {
    assert_eq!(
        significant("four_pi_squared = 4 * pi^2"),
        [
            (K::Identifier, "four_pi_squared"),
            (K::Operator, "="),
            (K::Number, "4"),
            (K::Operator, "*"),
            (K::Identifier, "pi"),
            (K::Operator, "^"),
            (K::Number, "2"),
        ]
    );
}

#[test]
fn coverage_on_awkward_inputs() {
    for src in [
        "1 (",
        "1 ((",
        "2 m^",
        "2 m^ *s",
        "\"\\",
        "'",
        "1e",
        "x\r\n\ty",
        "def\n",
        "3 µ",
        "(((1 kg)))",
        "1 (m))",
    ] {
        assert_covers(src);
    }
}

use super::*;

// === Scope names ===

#[test]
fn scope_names_follow_dotted_convention() {
    assert_eq!(TokenKind::Keyword.scope(), "keyword");
    assert_eq!(TokenKind::FunctionDeclaration.scope(), "function.declaration");
    assert_eq!(TokenKind::FunctionCall.scope(), "function.call");
    assert_eq!(TokenKind::UnitExponentNumber.scope(), "number.unit");
    assert_eq!(TokenKind::UnitOperator.scope(), "operator.unit");
    assert_eq!(TokenKind::StringEscape.scope(), "string.escape");
    assert_eq!(TokenKind::StringInvalid.scope(), "string.invalid");
    assert_eq!(TokenKind::Whitespace.scope(), "white");
}

#[test]
fn bracket_scope_depends_on_pair() {
    assert_eq!(
        TokenKind::Bracket(BracketPair::Curly).scope(),
        "delimiter.curly"
    );
    assert_eq!(
        TokenKind::Bracket(BracketPair::Square).scope(),
        "delimiter.square"
    );
    assert_eq!(
        TokenKind::Bracket(BracketPair::Parenthesis).scope(),
        "delimiter.parenthesis"
    );
}

// === Brackets ===

#[test]
fn bracket_lookup_by_byte() {
    assert_eq!(BracketPair::of(b'('), Some(BracketPair::Parenthesis));
    assert_eq!(BracketPair::of(b']'), Some(BracketPair::Square));
    assert_eq!(BracketPair::of(b'}'), Some(BracketPair::Curly));
    assert_eq!(BracketPair::of(b'<'), None);
}

// === Tokens ===

#[test]
fn token_span_covers_text() {
    let tok = Token::new(TokenKind::Unit, "ms", 4);
    assert_eq!(tok.span, Span::new(4, 6));
}

#[test]
fn token_serializes_flat_with_scope_kind() {
    let tok = Token::new(TokenKind::UnitOperator, "/", 3);
    let json = serde_json::to_string(&tok).unwrap();
    assert_eq!(
        json,
        r#"{"kind":"operator.unit","text":"/","start":3,"end":4}"#
    );
}

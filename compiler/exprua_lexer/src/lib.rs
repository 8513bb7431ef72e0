//! Unit-aware tokenizer for ExprUA scientific expressions.
//!
//! The lexer is a stack of modes, each an ordered list of rules. Numbers push
//! a unit-detection mode, so `9.8 m/s^2` yields unit tokens while `m` on its
//! own in `m = 2` stays whatever the root mode makes of it. Every input is
//! tokenized to the end; malformed text becomes `invalid` or
//! `string.invalid` tokens rather than errors.
//!
//! ```
//! use exprua_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("1 ms").into_iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Number, TokenKind::Whitespace, TokenKind::Unit]);
//! ```

mod config;
mod cursor;
mod lexer;
mod mode;
mod rules;
mod span;
mod tables;
mod token;
mod units;

pub use config::{ConfigError, ListEdit, TablesConfig};
pub(crate) use cursor::Cursor;
pub use lexer::Lexer;
pub use mode::{LexState, Mode, Transition};
pub use span::Span;
pub use tables::{
    LexTables, LexTablesBuilder, Table, TablesListing, DEFAULT_BASE_SI_UNITS, DEFAULT_BUILTINS,
    DEFAULT_KEYWORDS, DEFAULT_KNOWN_UNITS, DEFAULT_OPERATORS, DEFAULT_OTHER_UNITS,
    DEFAULT_SI_PREFIXES,
};
pub use token::{BracketPair, Token, TokenKind};
pub use units::{is_unit_word, UnitReading};

/// Tokenize `source` with the standard tables.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    tokenize_with(source, LexTables::standard())
}

/// Tokenize `source` with custom tables.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with<'src>(source: &'src str, tables: &LexTables) -> Vec<Token<'src>> {
    let tokens: Vec<_> = Lexer::with_tables(source, tables).collect();
    tracing::debug!(tokens = tokens.len(), "tokenized");
    tokens
}

//! Token kinds and classified tokens.
//!
//! [`TokenKind`] is a closed set. Every kind maps to a dotted *scope name*
//! (`string.escape`, `operator.unit`, ...) which is what themes key their
//! styles on and what the JSON token dump emits.

use serde::{Serialize, Serializer};

use crate::Span;

/// The three bracket shapes the root mode classifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BracketPair {
    /// `{` and `}`
    Curly,
    /// `[` and `]`
    Square,
    /// `(` and `)`
    Parenthesis,
}

impl BracketPair {
    /// Every bracket pair, in table order.
    pub const ALL: [BracketPair; 3] = [
        BracketPair::Curly,
        BracketPair::Square,
        BracketPair::Parenthesis,
    ];

    /// Opening character of the pair.
    pub const fn open(self) -> u8 {
        match self {
            BracketPair::Curly => b'{',
            BracketPair::Square => b'[',
            BracketPair::Parenthesis => b'(',
        }
    }

    /// Closing character of the pair.
    pub const fn close(self) -> u8 {
        match self {
            BracketPair::Curly => b'}',
            BracketPair::Square => b']',
            BracketPair::Parenthesis => b')',
        }
    }

    /// Look up the pair a bracket byte belongs to.
    pub fn of(byte: u8) -> Option<BracketPair> {
        Self::ALL
            .into_iter()
            .find(|pair| pair.open() == byte || pair.close() == byte)
    }

    /// Scope name used for bracket tokens of this pair.
    pub const fn scope(self) -> &'static str {
        match self {
            BracketPair::Curly => "delimiter.curly",
            BracketPair::Square => "delimiter.square",
            BracketPair::Parenthesis => "delimiter.parenthesis",
        }
    }
}

/// Classification of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Words ===
    /// Reserved word (`if`, `def`, `and`, ...).
    Keyword,
    /// Plain identifier.
    Identifier,
    /// Built-in function name (`sin`, `sqrt`, ...).
    Predefined,
    /// Name following `def`.
    FunctionDeclaration,
    /// Non-builtin identifier followed by `(`.
    FunctionCall,

    // === Numbers and units ===
    /// Numeric literal.
    Number,
    /// Unit symbol, optionally SI-prefixed (`m`, `ms`, `kg`).
    Unit,
    /// Exponent digits inside a unit expression (`2` in `s^2`).
    UnitExponentNumber,
    /// `*`, `/` or `^` inside a unit expression.
    UnitOperator,

    // === Operators and punctuation ===
    /// Symbol run found in the operator table.
    Operator,
    /// Symbol run not found in the operator table.
    Symbol,
    /// `,`, `.` or `:`.
    Delimiter,
    /// Opening or closing bracket.
    Bracket(BracketPair),

    // === Strings ===
    /// String contents.
    String,
    /// Backslash escape inside a string.
    StringEscape,
    /// Opening or closing quote.
    StringQuote,
    /// Unterminated string run.
    StringInvalid,

    // === Trivia ===
    /// `#` line comment.
    Comment,
    /// Spaces, tabs and newlines.
    Whitespace,

    /// A character no rule accepts.
    Invalid,
}

impl TokenKind {
    /// Dotted scope name, as used by themes.
    pub const fn scope(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Predefined => "predefined",
            TokenKind::FunctionDeclaration => "function.declaration",
            TokenKind::FunctionCall => "function.call",
            TokenKind::Number => "number",
            TokenKind::Unit => "unit",
            TokenKind::UnitExponentNumber => "number.unit",
            TokenKind::UnitOperator => "operator.unit",
            TokenKind::Operator => "operator",
            TokenKind::Symbol => "symbol",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Bracket(pair) => pair.scope(),
            TokenKind::String => "string",
            TokenKind::StringEscape => "string.escape",
            TokenKind::StringQuote => "string.quote",
            TokenKind::StringInvalid => "string.invalid",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "white",
            TokenKind::Invalid => "invalid",
        }
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.scope())
    }
}

/// A classified, positioned fragment of the source.
///
/// `text` borrows from the lexed source and always equals
/// `&source[span.start..span.end]`. Tokens are never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    #[serde(flatten)]
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a token for `text` starting at byte offset `start`.
    pub fn new(kind: TokenKind, text: &'src str, start: usize) -> Self {
        Token {
            kind,
            text,
            span: Span::new(start, start + text.len()),
        }
    }
}

#[cfg(test)]
mod tests;

//! `exprua lex`: dump the token stream.

use std::fmt::Write as _;

use exprua_lexer::{tokenize_with, LexTables};

use crate::CliError;

/// Output shape of `exprua lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LexFormat {
    /// One `<scope> <start>..<end> <text>` line per token.
    #[default]
    Text,
    /// Pretty-printed JSON array of `{kind, text, start, end}`.
    Json,
}

/// Lex `source` and render the tokens in `format`.
pub fn lex_source(source: &str, tables: &LexTables, format: LexFormat) -> Result<String, CliError> {
    let tokens = tokenize_with(source, tables);
    match format {
        LexFormat::Text => {
            let mut out = String::new();
            for token in &tokens {
                let _ = writeln!(out, "{} {} {:?}", token.kind.scope(), token.span, token.text);
            }
            Ok(out)
        }
        LexFormat::Json => {
            let mut out = serde_json::to_string_pretty(&tokens)?;
            out.push('\n');
            Ok(out)
        }
    }
}

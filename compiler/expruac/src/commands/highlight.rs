//! `exprua highlight`: colored source.

use exprua_highlight::{render_ansi, Theme};
use exprua_lexer::{tokenize_with, LexTables};

/// Lex `source` and render it in `theme`; plain text when `colors` is off.
pub fn highlight_source(source: &str, tables: &LexTables, theme: &Theme, colors: bool) -> String {
    if !colors {
        return source.to_owned();
    }
    render_ansi(&tokenize_with(source, tables), theme)
}

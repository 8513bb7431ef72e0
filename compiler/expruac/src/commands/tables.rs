//! `exprua tables`: print the effective lookup tables.

use exprua_lexer::LexTables;

use crate::CliError;

/// The tables as pretty JSON, one key per table.
pub fn tables_json(tables: &LexTables) -> Result<String, CliError> {
    let mut out = serde_json::to_string_pretty(&tables.listing())?;
    out.push('\n');
    Ok(out)
}

//! Command handlers for the `exprua` CLI.
//!
//! Handlers render into a `String` so they can be tested without a
//! process; `main` only writes the result to stdout. Shared input and
//! table loading lives here in the module root.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use exprua_lexer::{LexTables, TablesConfig};

use crate::CliError;

mod highlight;
mod lex;
mod tables;

pub use highlight::highlight_source;
pub use lex::{lex_source, LexFormat};
pub use tables::tables_json;

/// Read a source file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Input {
        path: path.to_owned(),
        source,
    })
}

/// Standard tables, or the standard tables edited by a JSON config file.
pub fn load_tables(config: Option<&Path>) -> Result<Cow<'static, LexTables>, CliError> {
    match config {
        None => Ok(Cow::Borrowed(LexTables::standard())),
        Some(path) => {
            let config = TablesConfig::load(path)?;
            let tables = LexTables::from_config(&config)?;
            tracing::debug!(path = %path.display(), "loaded table overrides");
            Ok(Cow::Owned(tables))
        }
    }
}

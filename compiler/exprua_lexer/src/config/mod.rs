//! JSON overrides for the lexer tables.
//!
//! A [`TablesConfig`] lists per-table edits applied on top of the defaults:
//!
//! ```json
//! {
//!     "base_si_units": { "add": ["T", "Wb"] },
//!     "keywords": { "remove": ["mand", "mor"] },
//!     "other_units": { "replace": ["min", "h", "bar", "L", "atm"] }
//! }
//! ```
//!
//! For each table, `replace` (if present) runs first, then `add`, then
//! `remove`. Unknown keys are rejected so that typos surface as errors
//! instead of silently doing nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::units::is_unit_word;
use crate::{LexTables, LexTablesBuilder, Table};

/// Error loading or applying a tables configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read tables config `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for [`TablesConfig`].
    #[error("malformed tables config: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    /// An entry can never be produced by the lexer for its table.
    #[error("invalid {table} entry {entry:?}: {reason}")]
    Invalid {
        table: Table,
        entry: String,
        reason: &'static str,
    },
}

/// Edits to a single table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListEdit {
    /// New contents, replacing the defaults entirely.
    pub replace: Option<Vec<String>>,
    /// Entries appended to the table.
    pub add: Vec<String>,
    /// Entries removed from the table.
    pub remove: Vec<String>,
}

impl ListEdit {
    fn is_noop(&self) -> bool {
        self.replace.is_none() && self.add.is_empty() && self.remove.is_empty()
    }

    /// Entries this edit introduces into the table.
    fn introduced(&self) -> impl Iterator<Item = &String> {
        self.replace.iter().flatten().chain(self.add.iter())
    }
}

/// Per-table edits, deserialized from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    pub keywords: ListEdit,
    pub builtins: ListEdit,
    pub operators: ListEdit,
    pub si_prefixes: ListEdit,
    pub base_si_units: ListEdit,
    pub other_units: ListEdit,
    pub known_units: ListEdit,
}

impl TablesConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded tables config");
        Self::from_json_str(&json)
    }

    /// The edit for `table`.
    pub fn edit(&self, table: Table) -> &ListEdit {
        match table {
            Table::Keywords => &self.keywords,
            Table::Builtins => &self.builtins,
            Table::Operators => &self.operators,
            Table::SiPrefixes => &self.si_prefixes,
            Table::BaseSiUnits => &self.base_si_units,
            Table::OtherUnits => &self.other_units,
            Table::KnownUnits => &self.known_units,
        }
    }

    /// Check every introduced entry against what its table can match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for table in Table::ALL {
            for entry in self.edit(table).introduced() {
                if let Err(reason) = validate_entry(table, entry) {
                    return Err(ConfigError::Invalid {
                        table,
                        entry: entry.clone(),
                        reason,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate and apply the edits to `builder`.
    pub fn apply(&self, builder: LexTablesBuilder) -> Result<LexTablesBuilder, ConfigError> {
        self.validate()?;
        let mut builder = builder;
        for table in Table::ALL {
            let edit = self.edit(table);
            if edit.is_noop() {
                continue;
            }
            tracing::debug!(
                %table,
                replaced = edit.replace.is_some(),
                added = edit.add.len(),
                removed = edit.remove.len(),
                "applying table edit"
            );
            if let Some(entries) = &edit.replace {
                builder = builder.replace(table, entries.iter().cloned());
            }
            builder = builder
                .add(table, edit.add.iter().cloned())
                .remove(table, &edit.remove);
        }
        Ok(builder)
    }
}

impl LexTables {
    /// Default tables with `config` applied.
    pub fn from_config(config: &TablesConfig) -> Result<Self, ConfigError> {
        Ok(config.apply(LexTables::builder())?.build())
    }
}

fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_symbol_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(crate::rules::is_symbol_byte)
}

fn validate_entry(table: Table, entry: &str) -> Result<(), &'static str> {
    if entry.is_empty() {
        return Err("entries must not be empty");
    }
    match table {
        Table::Keywords | Table::Builtins => {
            if is_identifier(entry) {
                Ok(())
            } else {
                Err("must be an ASCII identifier")
            }
        }
        Table::Operators => {
            if entry == "[]" || is_symbol_run(entry) || is_identifier(entry) {
                Ok(())
            } else {
                Err("must be a symbol run, `[]` or a word operator")
            }
        }
        Table::SiPrefixes | Table::BaseSiUnits | Table::OtherUnits | Table::KnownUnits => {
            if is_unit_word(entry) {
                Ok(())
            } else {
                Err("must be a single unit word")
            }
        }
    }
}

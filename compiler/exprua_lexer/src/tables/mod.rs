//! Static lookup tables: keywords, builtins, operators and the unit system.
//!
//! The dispatcher never hard-codes a word. Everything it classifies by
//! membership comes from a [`LexTables`] value, so new units or keywords can
//! be added without touching any mode's rules.
//!
//! # Default and custom tables
//!
//! [`LexTables::standard`] is the process-wide default, built once on first
//! use and read-only afterwards. Custom tables start from the defaults via
//! [`LexTables::builder`] (or from a JSON [`TablesConfig`](crate::TablesConfig))
//! and are owned by the caller.
//!
//! # SI prefix order
//!
//! Prefixes are stored longest-first, so `da` (deca) is tried before `d`
//! (deci). Within one length the declared order is kept.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::Serialize;

/// Reserved words.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "repeat", "until", "switch", "case", "default", "break",
    "continue", "return", "def", "in", "and", "nand", "nor", "not", "or", "xor", "xnor", "mand",
    "mor",
];

/// Built-in function names.
pub const DEFAULT_BUILTINS: &[&str] = &[
    // Trigonometric
    "sin", "cos", "tan", "asin", "acos", "atan", "atan2",
    // Exponential/Log
    "exp", "log", "log10", "log2", "sqrt",
    // Statistical
    "avg", "sum",
    // Vector/Matrix
    "cross", "normalize",
    // Other
    "abs", "floor", "ceil", "round",
];

/// Operator spellings. Word operators are listed too, although the root
/// mode reaches them as keywords first.
pub const DEFAULT_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "!", "[]", "=", "+=", "-=", "*=", "/=", "%=", "^=", "==", "!=",
    "<", "<=", ">", ">=", "and", "nand", "nor", "not", "or", "xor", "xnor", "mand", "mor",
];

/// SI prefixes, large to small.
pub const DEFAULT_SI_PREFIXES: &[&str] = &[
    "Y", "Z", "E", "P", "T", "G", "M", "k", "h", "da", "d", "c", "m", "µ", "u", "n", "p", "f", "a",
    "z", "y",
];

/// Units that accept an SI prefix.
pub const DEFAULT_BASE_SI_UNITS: &[&str] = &[
    "m", "g", "s", "A", "K", "mol", "cd", "Hz", "N", "Pa", "J", "W", "C", "V", "F", "Ω", "H",
];

/// Units that never take a prefix.
pub const DEFAULT_OTHER_UNITS: &[&str] = &["min", "h", "bar", "L"];

/// Unit names the root mode recognizes on their own, outside a unit
/// expression. Prefixed forms are deliberately absent so that names like
/// `ms` or `pm` stay identifiers when no number precedes them.
pub const DEFAULT_KNOWN_UNITS: &[&str] = &[
    "m", "s", "kg", "A", "K", "mol", "cd", "N", "Pa", "J", "W", "C", "V", "F", "Ω", "Hz", "H", "g",
    "L", "min", "h", "bar",
];

/// Names one of the overridable tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Keywords,
    Builtins,
    Operators,
    SiPrefixes,
    BaseSiUnits,
    OtherUnits,
    KnownUnits,
}

impl Table {
    /// Every table, in configuration order.
    pub const ALL: [Table; 7] = [
        Table::Keywords,
        Table::Builtins,
        Table::Operators,
        Table::SiPrefixes,
        Table::BaseSiUnits,
        Table::OtherUnits,
        Table::KnownUnits,
    ];

    /// Configuration key of the table.
    pub const fn name(self) -> &'static str {
        match self {
            Table::Keywords => "keywords",
            Table::Builtins => "builtins",
            Table::Operators => "operators",
            Table::SiPrefixes => "si_prefixes",
            Table::BaseSiUnits => "base_si_units",
            Table::OtherUnits => "other_units",
            Table::KnownUnits => "known_units",
        }
    }

    /// Built-in contents of the table.
    pub const fn defaults(self) -> &'static [&'static str] {
        match self {
            Table::Keywords => DEFAULT_KEYWORDS,
            Table::Builtins => DEFAULT_BUILTINS,
            Table::Operators => DEFAULT_OPERATORS,
            Table::SiPrefixes => DEFAULT_SI_PREFIXES,
            Table::BaseSiUnits => DEFAULT_BASE_SI_UNITS,
            Table::OtherUnits => DEFAULT_OTHER_UNITS,
            Table::KnownUnits => DEFAULT_KNOWN_UNITS,
        }
    }

    const fn index(self) -> usize {
        match self {
            Table::Keywords => 0,
            Table::Builtins => 1,
            Table::Operators => 2,
            Table::SiPrefixes => 3,
            Table::BaseSiUnits => 4,
            Table::OtherUnits => 5,
            Table::KnownUnits => 6,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable lookup tables consulted by every lexing mode.
#[derive(Clone, Debug)]
pub struct LexTables {
    keywords: FxHashSet<String>,
    builtins: FxHashSet<String>,
    operators: FxHashSet<String>,
    /// Longest first.
    si_prefixes: Vec<String>,
    base_si_units: FxHashSet<String>,
    other_units: FxHashSet<String>,
    known_units: FxHashSet<String>,
}

impl LexTables {
    /// The process-wide default tables.
    pub fn standard() -> &'static LexTables {
        static STANDARD: OnceLock<LexTables> = OnceLock::new();
        STANDARD.get_or_init(|| LexTables::builder().build())
    }

    /// A builder pre-filled with the default tables.
    pub fn builder() -> LexTablesBuilder {
        LexTablesBuilder::new()
    }

    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    #[inline]
    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.contains(word)
    }

    #[inline]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.operators.contains(symbol)
    }

    #[inline]
    pub fn is_base_unit(&self, word: &str) -> bool {
        self.base_si_units.contains(word)
    }

    #[inline]
    pub fn is_other_unit(&self, word: &str) -> bool {
        self.other_units.contains(word)
    }

    /// Unit name recognized by the root mode without a preceding number.
    #[inline]
    pub fn is_known_unit(&self, word: &str) -> bool {
        self.known_units.contains(word)
    }

    /// SI prefixes in match order (longest first).
    pub fn si_prefixes(&self) -> impl Iterator<Item = &str> {
        self.si_prefixes.iter().map(String::as_str)
    }

    /// Sorted, serializable view of every table.
    pub fn listing(&self) -> TablesListing<'_> {
        TablesListing {
            keywords: sorted(&self.keywords),
            builtins: sorted(&self.builtins),
            operators: sorted(&self.operators),
            si_prefixes: self.si_prefixes().collect(),
            base_si_units: sorted(&self.base_si_units),
            other_units: sorted(&self.other_units),
            known_units: sorted(&self.known_units),
        }
    }
}

impl Default for LexTables {
    fn default() -> Self {
        LexTables::builder().build()
    }
}

fn sorted(set: &FxHashSet<String>) -> Vec<&str> {
    let mut entries: Vec<&str> = set.iter().map(String::as_str).collect();
    entries.sort_unstable();
    entries
}

/// Deterministic listing of a [`LexTables`], for display and JSON dumps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TablesListing<'a> {
    pub keywords: Vec<&'a str>,
    pub builtins: Vec<&'a str>,
    pub operators: Vec<&'a str>,
    pub si_prefixes: Vec<&'a str>,
    pub base_si_units: Vec<&'a str>,
    pub other_units: Vec<&'a str>,
    pub known_units: Vec<&'a str>,
}

/// Builder for custom [`LexTables`].
///
/// Entries keep their insertion order until [`build`](Self::build), where
/// prefixes are stably sorted longest-first and the rest become hash sets.
/// Entries the dispatcher can never produce (for example a unit containing
/// `*`) are accepted here but simply never match; use
/// [`TablesConfig`](crate::TablesConfig) for validated input.
#[derive(Clone, Debug)]
pub struct LexTablesBuilder {
    entries: [Vec<String>; 7],
}

impl LexTablesBuilder {
    fn new() -> Self {
        let entries = Table::ALL.map(|table| {
            table
                .defaults()
                .iter()
                .map(|entry| (*entry).to_owned())
                .collect()
        });
        Self { entries }
    }

    /// Replace the whole contents of `table`.
    #[must_use]
    pub fn replace<I, S>(mut self, table: Table, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries[table.index()].clear();
        self.add(table, entries)
    }

    /// Append entries to `table`, skipping ones already present.
    #[must_use]
    pub fn add<I, S>(mut self, table: Table, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = &mut self.entries[table.index()];
        for entry in entries {
            let entry = entry.into();
            if !list.contains(&entry) {
                list.push(entry);
            }
        }
        self
    }

    /// Remove entries from `table`. Missing entries are ignored.
    #[must_use]
    pub fn remove<I, S>(mut self, table: Table, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = &mut self.entries[table.index()];
        for entry in entries {
            list.retain(|existing| existing != entry.as_ref());
        }
        self
    }

    /// Current entries of `table`, in insertion order.
    pub fn entries(&self, table: Table) -> &[String] {
        &self.entries[table.index()]
    }

    /// Freeze the builder into lookup tables.
    pub fn build(self) -> LexTables {
        let [keywords, builtins, operators, mut si_prefixes, base_si_units, other_units, known_units] =
            self.entries;
        // Stable: equal-length prefixes keep their declared order.
        si_prefixes.sort_by_key(|prefix| std::cmp::Reverse(prefix.chars().count()));
        let tables = LexTables {
            keywords: keywords.into_iter().collect(),
            builtins: builtins.into_iter().collect(),
            operators: operators.into_iter().collect(),
            si_prefixes,
            base_si_units: base_si_units.into_iter().collect(),
            other_units: other_units.into_iter().collect(),
            known_units: known_units.into_iter().collect(),
        };
        tracing::debug!(
            keywords = tables.keywords.len(),
            builtins = tables.builtins.len(),
            prefixes = tables.si_prefixes.len(),
            base_units = tables.base_si_units.len(),
            other_units = tables.other_units.len(),
            "built lexer tables"
        );
        tables
    }
}

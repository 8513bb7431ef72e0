//! Light and dark editor themes.
//!
//! A theme maps token scopes (`"unit"`, `"operator.unit"`, ...) to styles.
//! Lookup follows scope inheritance: `string.quote` has no rule of its own
//! and falls back to `string`. Scopes with no rule anywhere on their chain
//! (`white`, `symbol`, `invalid`) are unstyled.

use std::fmt;
use std::str::FromStr;

use exprua_lexer::TokenKind;

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Foreground color and font style of one scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    const fn fg(r: u8, g: u8, b: u8) -> Self {
        Style {
            foreground: Some(Rgb::new(r, g, b)),
            bold: false,
            italic: false,
        }
    }

    const fn bold(self) -> Self {
        Style { bold: true, ..self }
    }

    const fn italic(self) -> Self {
        Style {
            italic: true,
            ..self
        }
    }

    /// Returns `true` if the style changes nothing.
    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && !self.bold && !self.italic
    }
}

/// The two built-in themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub const fn name(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeVariant::Light => &LIGHT,
            ThemeVariant::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that is neither `light` nor `dark`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeVariant {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

/// Scope-to-style rules.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub variant: ThemeVariant,
    rules: &'static [(&'static str, Style)],
}

impl Theme {
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    pub fn dark() -> &'static Theme {
        &DARK
    }

    /// Style of `scope`, walking up its dotted parents until a rule matches.
    pub fn style_for_scope(&self, scope: &str) -> Option<Style> {
        let mut scope = scope;
        loop {
            if let Some((_, style)) = self.rules.iter().find(|(name, _)| *name == scope) {
                return Some(*style);
            }
            scope = &scope[..scope.rfind('.')?];
        }
    }

    /// Style of a token kind; unstyled kinds get [`Style::default`].
    pub fn style(&self, kind: TokenKind) -> Style {
        self.style_for_scope(kind.scope()).unwrap_or_default()
    }

}

static LIGHT: Theme = Theme {
    variant: ThemeVariant::Light,
    rules: &[
        ("keyword", Style::fg(0x87, 0x10, 0x94).bold()),
        ("unit", Style::fg(0x00, 0x66, 0xCC).bold()),
        ("operator.unit", Style::fg(0x00, 0x66, 0xCC)),
        ("number.unit", Style::fg(0x00, 0x66, 0xCC)),
        ("function.declaration", Style::fg(0x00, 0xAA, 0xAA)),
        ("function.call", Style::fg(0x79, 0x5E, 0x26)),
        ("predefined", Style::fg(0x00, 0xAA, 0x00)),
        ("identifier", Style::fg(0x17, 0x50, 0xEB)),
        ("comment", Style::fg(0x00, 0x80, 0x00).italic()),
        ("string", Style::fg(0xAA, 0x00, 0x00)),
        ("string.escape", Style::fg(0xDD, 0x44, 0x88).bold()),
        ("string.invalid", Style::fg(0xF5, 0x44, 0x00).bold()),
        ("number", Style::fg(0x00, 0x33, 0xB3)),
        ("operator", Style::fg(0x44, 0x44, 0x44)),
        ("delimiter", Style::fg(0x66, 0x66, 0x66)),
        ("delimiter.parenthesis", Style::fg(0x66, 0x66, 0x66)),
        ("delimiter.square", Style::fg(0x66, 0x66, 0x66)),
        ("delimiter.curly", Style::fg(0x66, 0x66, 0x66)),
    ],
};

static DARK: Theme = Theme {
    variant: ThemeVariant::Dark,
    rules: &[
        ("keyword", Style::fg(0xC5, 0x86, 0xC0).bold()),
        ("unit", Style::fg(0x4F, 0xC1, 0xFF).bold()),
        ("operator.unit", Style::fg(0x4F, 0xC1, 0xFF)),
        ("number.unit", Style::fg(0x4F, 0xC1, 0xFF)),
        ("function.declaration", Style::fg(0x4E, 0xC9, 0xB0)),
        ("function.call", Style::fg(0xDC, 0xDC, 0xAA)),
        ("predefined", Style::fg(0x4E, 0xC9, 0xB0)),
        ("identifier", Style::fg(0x9C, 0xDC, 0xFE)),
        ("comment", Style::fg(0x6A, 0x99, 0x55).italic()),
        ("string", Style::fg(0xCE, 0x91, 0x78)),
        ("string.escape", Style::fg(0xD7, 0xBA, 0x7D).bold()),
        ("string.invalid", Style::fg(0xF1, 0x4C, 0x4C).bold()),
        ("number", Style::fg(0xB5, 0xCE, 0xA8)),
        ("operator", Style::fg(0xD4, 0xD4, 0xD4)),
        ("delimiter", Style::fg(0xD4, 0xD4, 0xD4)),
        ("delimiter.parenthesis", Style::fg(0xD4, 0xD4, 0xD4)),
        ("delimiter.square", Style::fg(0xD4, 0xD4, 0xD4)),
        ("delimiter.curly", Style::fg(0xD4, 0xD4, 0xD4)),
    ],
};

//! 24-bit ANSI rendering of token streams.
//!
//! Each styled token is wrapped in one SGR sequence and a reset; unstyled
//! tokens are written as-is. Stripping the escapes gives back the source.

use std::fmt::Write as _;

use exprua_lexer::Token;

use crate::{Style, Theme};

const RESET: &str = "\x1b[0m";

/// Whether escapes are written at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a TTY. `is_tty` only matters
    /// for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// SGR sequence selecting `style`, or `None` for a plain style.
fn sgr(style: Style) -> Option<String> {
    if style.is_plain() {
        return None;
    }
    let mut params = Vec::with_capacity(3);
    if style.bold {
        params.push("1".to_owned());
    }
    if style.italic {
        params.push("3".to_owned());
    }
    if let Some(rgb) = style.foreground {
        params.push(format!("38;2;{};{};{}", rgb.r, rgb.g, rgb.b));
    }
    Some(format!("\x1b[{}m", params.join(";")))
}

/// Render `tokens` with `theme` into a string.
pub fn render_ansi(tokens: &[Token<'_>], theme: &Theme) -> String {
    let mut out = String::new();
    for token in tokens {
        match sgr(theme.style(token.kind)) {
            Some(code) => {
                let _ = write!(out, "{code}{}{RESET}", token.text);
            }
            None => out.push_str(token.text),
        }
    }
    out
}

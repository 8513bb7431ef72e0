//! Themes and terminal rendering for ExprUA token streams.
//!
//! Carries the light and dark editor themes and renders a lexed source as
//! 24-bit ANSI text.

mod ansi;
mod theme;

pub use ansi::{render_ansi, ColorMode};
pub use theme::{Rgb, Style, Theme, ThemeVariant, UnknownTheme};

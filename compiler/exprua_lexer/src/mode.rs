//! Lexing modes and the mode stack.

use std::fmt;

/// A named lexing context with its own ordered rule list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Top-level source.
    Root,
    /// Whitespace runs; included by `Root`.
    Whitespace,
    /// Inside `"..."`.
    StringDouble,
    /// Inside `'...'`.
    StringSingle,
    /// Directly after a number: a unit may follow.
    ExpectUnit,
    /// After a number and some whitespace: a unit may still follow.
    ExpectUnitAfterSpace,
    /// After a unit: `*`, `/`, `^`, more units or a unit group may follow.
    UnitExpression,
    /// After `^` in a unit expression.
    UnitExponent,
    /// Inside a parenthesized unit group.
    UnitParenthesis,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::Whitespace => "whitespace",
            Mode::StringDouble => "string_double",
            Mode::StringSingle => "string_single",
            Mode::ExpectUnit => "expect_unit",
            Mode::ExpectUnitAfterSpace => "expect_unit_after_space",
            Mode::UnitExpression => "unit_expression",
            Mode::UnitExponent => "unit_exponent",
            Mode::UnitParenthesis => "unit_parenthesis",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack operation applied after a rule matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current mode.
    Stay,
    /// Enter `mode`, returning here when it pops.
    Push(Mode),
    /// Return to the enclosing mode.
    Pop,
    /// Swap the current mode for `mode`.
    Replace(Mode),
    /// Swap the current mode for the first, then enter the second.
    ReplaceThenPush(Mode, Mode),
}

/// Cursor offset plus mode stack: the only state carried between tokens.
///
/// The stack is never empty and its bottom frame is always [`Mode::Root`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexState {
    pos: usize,
    modes: Vec<Mode>,
}

impl LexState {
    /// Offset 0, stack `[Root]`.
    pub fn new() -> Self {
        Self {
            pos: 0,
            modes: vec![Mode::Root],
        }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Mode on top of the stack.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Root)
    }

    /// Number of frames on the stack, including `Root`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// The whole stack, bottom first.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub(crate) fn advance(&mut self, len: usize) {
        self.pos += len;
    }

    /// Apply `transition`. The bottom `Root` frame is never popped or
    /// replaced; such requests leave it in place.
    pub(crate) fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(mode) => self.modes.push(mode),
            Transition::Pop => {
                if self.modes.len() > 1 {
                    self.modes.pop();
                }
            }
            Transition::Replace(mode) => self.replace_top(mode),
            Transition::ReplaceThenPush(replacement, pushed) => {
                self.replace_top(replacement);
                self.modes.push(pushed);
            }
        }
    }

    fn replace_top(&mut self, mode: Mode) {
        if self.modes.len() > 1 {
            self.modes.pop();
        }
        self.modes.push(mode);
    }
}

impl Default for LexState {
    fn default() -> Self {
        Self::new()
    }
}

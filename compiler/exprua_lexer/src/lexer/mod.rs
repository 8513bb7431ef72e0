//! Mode-stack dispatcher.
//!
//! [`Lexer`] pulls one rule match per step from the rule list of the mode on
//! top of the stack and yields the resulting tokens one at a time. Steps that
//! emit several tokens (function calls, declarations) are buffered.
//!
//! Termination: every consuming step advances the offset, and every
//! zero-width step removes a stack frame. Where no rule matches, or a
//! zero-width step would pop the bottom `Root` frame, one character becomes
//! an `invalid` token in the current mode, so the offset always reaches the
//! end of input.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::rules::{rules_for, Rule, Step};
use crate::{Cursor, LexState, LexTables, Token, TokenKind, Transition};

/// Lazy token stream over one source string.
///
/// Cloning a lexer forks the stream: both copies continue from the same
/// state and yield identical tokens.
#[derive(Clone, Debug)]
pub struct Lexer<'src, 't> {
    source: &'src str,
    tables: &'t LexTables,
    state: LexState,
    pending: VecDeque<Token<'src>>,
}

impl<'src> Lexer<'src, 'static> {
    /// Lex `source` with the standard tables.
    pub fn new(source: &'src str) -> Self {
        Lexer::with_tables(source, LexTables::standard())
    }
}

impl<'src, 't> Lexer<'src, 't> {
    /// Lex `source` with caller-provided tables.
    pub fn with_tables(source: &'src str, tables: &'t LexTables) -> Self {
        Lexer {
            source,
            tables,
            state: LexState::new(),
            pending: VecDeque::new(),
        }
    }

    /// Offset and mode stack after the last step.
    ///
    /// Buffered tokens from a multi-token step are already accounted for in
    /// the offset.
    pub fn state(&self) -> &LexState {
        &self.state
    }

    /// Run one rule match at the current offset and buffer its tokens.
    fn step(&mut self) {
        loop {
            let pos = self.state.pos();
            let cursor = Cursor::at(self.source, pos);
            let mode = self.state.mode();

            let (rule, step) = match eval(rules_for(mode), cursor, self.tables) {
                Some((rule, step)) if step.len() > 0 => (rule, step),
                Some((rule, _)) if self.state.depth() > 1 => {
                    self.state.apply(Transition::Pop);
                    tracing::trace!(pos, rule, from = %mode, to = %self.state.mode(), "rematch");
                    continue;
                }
                _ => {
                    let mut scan = cursor;
                    scan.advance_char();
                    let len = scan.pos() - pos;
                    self.push_token(TokenKind::Invalid, pos, len);
                    self.state.advance(len);
                    return;
                }
            };

            let mut start = pos;
            for piece in &step.pieces {
                self.push_token(piece.kind, start, piece.len);
                start += piece.len;
            }
            self.state.advance(step.len());
            if step.transition != Transition::Stay {
                self.state.apply(step.transition);
                tracing::trace!(
                    pos = self.state.pos(),
                    rule,
                    from = %mode,
                    to = %self.state.mode(),
                    depth = self.state.depth(),
                    "mode transition"
                );
            }
            return;
        }
    }

    fn push_token(&mut self, kind: TokenKind, start: usize, len: usize) {
        let text = &self.source[start..start + len];
        self.pending.push_back(Token::new(kind, text, start));
    }
}

/// First step any rule in `rules` produces at `cursor`, with the name of the
/// rule that produced it. Included modes are evaluated in place.
fn eval(
    rules: &'static [Rule],
    cursor: Cursor<'_>,
    tables: &LexTables,
) -> Option<(&'static str, Step)> {
    rules.iter().find_map(|rule| match rule {
        Rule::Match { name, matcher } => matcher(cursor, tables).map(|step| (*name, step)),
        Rule::Include(mode) => eval(rules_for(*mode), cursor, tables),
    })
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.pending.is_empty() && self.state.pos() < self.source.len() {
            self.step();
        }
        self.pending.pop_front()
    }
}

impl FusedIterator for Lexer<'_, '_> {}

#[cfg(test)]
mod tests;

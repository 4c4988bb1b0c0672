//! View: single-owner cursor over a command string.
//!
//! Positions are character indices, not byte offsets. The view keeps the
//! byte offset of every character so borrowed slices of the input can be
//! returned without rescanning.
//!
//! Invariants
//! - `previous` is written only by operations that move `index`, and only
//!   holds the single position before the latest move.
//! - `index` may pass `len()` after [`View::read`] or [`View::get`]; every
//!   query treats any such position as end of input.
//! - [`View::get`] advances first and then reads, so after it returns
//!   `Some(ch)` the cursor sits on `ch` and [`View::current`] returns it
//!   again.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{ErrorKind, ParseError, Tokens, ViewOptions};

const BACKSLASH: char = '\\';

/// A cursor over a fixed input string.
///
/// A view is built once per parse and driven by one owner through
/// `&mut self`; it is never rewound beyond a single [`undo`](View::undo).
#[derive(Debug, Clone)]
pub struct View<'src> {
    input: &'src str,
    /// `(byte offset, char)` for every character of `input`.
    chars: Vec<(usize, char)>,
    index: usize,
    previous: usize,
    options: ViewOptions,
}

impl<'src> View<'src> {
    /// Creates a view over `input` with default options.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self::with_options(input, ViewOptions::default())
    }

    /// Creates a view over `input` with the given options.
    #[must_use]
    pub fn with_options(input: &'src str, options: ViewOptions) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            index: 0,
            previous: 0,
            options,
        }
    }

    /// The full input this view scans.
    #[must_use]
    pub fn as_str(&self) -> &'src str {
        self.input
    }

    /// Number of characters in the input.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current cursor position, in characters.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position before the most recent cursor move.
    #[must_use]
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// The options this view was built with.
    #[must_use]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The character under the cursor, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.char_at(self.index)
    }

    /// Whether the cursor is at or past the end of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Moves the cursor back to where it was before the last move.
    ///
    /// Only one step is remembered; calling this twice in a row is the same
    /// as calling it once.
    pub fn undo(&mut self) {
        self.index = self.previous;
    }

    /// Skips over whitespace. Returns whether anything was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let end = self.scan_while(self.index, |ch| self.options.is_whitespace(ch));
        self.advance_to(end);
        self.previous != self.index
    }

    /// Skips forward to the next whitespace character or end of input.
    ///
    /// Useful for resynchronising after [`get_quoted_word`] fails, since a
    /// failure leaves the cursor wherever scanning stopped. Returns whether
    /// the cursor moved.
    ///
    /// [`get_quoted_word`]: View::get_quoted_word
    pub fn skip_to_whitespace(&mut self) -> bool {
        let end = self.scan_while(self.index, |ch| !self.options.is_whitespace(ch));
        self.advance_to(end);
        self.previous != self.index
    }

    /// Consumes `literal` if the input continues with it.
    ///
    /// On a mismatch nothing changes, `previous` included.
    pub fn skip_literal(&mut self, literal: &str) -> bool {
        if !self.input[self.byte_offset(self.index)..].starts_with(literal) {
            return false;
        }
        let end = self.index.saturating_add(literal.chars().count());
        self.advance_to(end);
        true
    }

    /// Returns everything from the cursor to the end and moves to the end.
    pub fn read_rest(&mut self) -> &'src str {
        let rest = self.slice(self.index, self.chars.len());
        self.advance_to(self.chars.len());
        rest
    }

    /// Returns up to `n` characters and advances the cursor by exactly `n`.
    ///
    /// Reading past the end truncates the result but still advances the
    /// full `n`, so the cursor can end up beyond [`len`](View::len).
    pub fn read(&mut self, n: usize) -> &'src str {
        let end = self.index.saturating_add(n);
        let result = self.slice(self.index, end);
        self.advance_to(end);
        result
    }

    /// Advances by one and returns the character now under the cursor.
    ///
    /// Unlike [`current`](View::current) this moves first: on `"ab"` with the
    /// cursor at `0`, `get()` returns `'b'` and leaves the cursor at `1`.
    /// Returns `None` once the new position is past the end.
    pub fn get(&mut self) -> Option<char> {
        self.advance_to(self.index.saturating_add(1));
        self.current()
    }

    /// Consumes and returns the run of non-whitespace characters at the
    /// cursor. The result is empty when the cursor is on whitespace or at
    /// end of input.
    pub fn get_word(&mut self) -> &'src str {
        let end = self.scan_while(self.index, |ch| !self.options.is_whitespace(ch));
        let word = self.slice(self.index, end);
        self.advance_to(end);
        word
    }

    /// Extracts one token, honouring quotes and backslash escapes.
    ///
    /// - A token starting with an opening quote runs to its matching closing
    ///   quote, which must be followed by whitespace or end of input. Inside,
    ///   `\` escapes only the opening and closing quote of that pair.
    /// - Any other token runs to the next whitespace. Inside, `\` escapes
    ///   any quote character, and an unescaped quote is an error.
    ///
    /// A backslash before any other character is kept as is. Returns
    /// `Ok(None)` at end of input.
    ///
    /// The cursor stops on the character that ended the token (the
    /// whitespace after it, or past the end), and is left wherever
    /// scanning stopped when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingClosingQuote`] if input ends inside a quoted
    ///   token.
    /// - [`ErrorKind::UnexpectedQuote`] if an unescaped quote appears in an
    ///   unquoted token.
    /// - [`ErrorKind::InvalidEndOfQuotedString`] if a closing quote is
    ///   directly followed by another character.
    pub fn get_quoted_word(&mut self) -> Result<Option<String>, ParseError> {
        let Some(first) = self.current() else {
            return Ok(None);
        };

        let quotes = self.options.quotes;
        let close_quote = quotes.closing_for(first);
        let mut result = String::new();
        if close_quote.is_none() {
            result.push(first);
        }
        let escapable = |ch: char| match close_quote {
            Some(close) => ch == first || ch == close,
            None => quotes.is_quote(ch),
        };

        loop {
            let Some(ch) = self.get() else {
                return self.finish_at_eof(close_quote, result);
            };

            if ch == BACKSLASH {
                let Some(next) = self.get() else {
                    return self.finish_at_eof(close_quote, result);
                };
                if escapable(next) {
                    result.push(next);
                } else {
                    // Re-read `next` on the following iteration.
                    self.undo();
                    result.push(BACKSLASH);
                }
                continue;
            }

            match close_quote {
                None if quotes.is_quote(ch) => {
                    return Err(self.fail(ErrorKind::UnexpectedQuote(ch)));
                }
                Some(close) if ch == close => {
                    return match self.get() {
                        Some(after) if !self.options.is_whitespace(after) => {
                            Err(self.fail(ErrorKind::InvalidEndOfQuotedString(after)))
                        }
                        _ => Ok(Some(self.emit(result))),
                    };
                }
                None if self.options.is_whitespace(ch) => return Ok(Some(self.emit(result))),
                _ => result.push(ch),
            }
        }
    }

    /// Iterates over the remaining tokens.
    ///
    /// Each step skips whitespace and then calls
    /// [`get_quoted_word`](View::get_quoted_word). The iterator ends at end
    /// of input and yields nothing more after the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'src> {
        Tokens::new(self)
    }

    fn finish_at_eof(
        &self,
        close_quote: Option<char>,
        result: String,
    ) -> Result<Option<String>, ParseError> {
        match close_quote {
            Some(close) => Err(self.fail(ErrorKind::MissingClosingQuote(close))),
            None => Ok(Some(self.emit(result))),
        }
    }

    fn emit(&self, token: String) -> String {
        tracing::trace!(index = self.index, token = token.as_str(), "token");
        token
    }

    fn fail(&self, kind: ErrorKind) -> ParseError {
        tracing::debug!(index = self.index, ?kind, "quoted word rejected");
        ParseError::new(kind, self.index)
    }

    fn advance_to(&mut self, index: usize) {
        self.previous = self.index;
        self.index = index;
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&(_, ch)| ch)
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.input.len(), |&(offset, _)| offset)
    }

    /// Input between two character positions; both are clamped to the end.
    fn slice(&self, start: usize, end: usize) -> &'src str {
        let start = self.byte_offset(start);
        let end = self.byte_offset(end).max(start);
        &self.input[start..end]
    }

    /// First position at or after `from` whose character fails `pred`.
    fn scan_while(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = from;
        while let Some(ch) = self.char_at(end) {
            if !pred(ch) {
                break;
            }
            end += 1;
        }
        end
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<View index={} previous={} end={} eof={}>",
            self.index,
            self.previous,
            self.chars.len(),
            self.is_eof()
        )
    }
}

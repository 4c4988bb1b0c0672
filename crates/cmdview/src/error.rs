use thiserror::Error;

/// Why a quoted-word extraction was aborted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Input ended while a quoted token was still open. Carries the closing
    /// quote that was expected.
    #[error("expected closing quote: {0}")]
    MissingClosingQuote(char),
    /// A quote character showed up inside an unquoted token.
    #[error("unexpected quote: {0}")]
    UnexpectedQuote(char),
    /// A closing quote was followed by something other than whitespace or
    /// end of input. Carries that character.
    #[error("invalid end of quoted string: {0}")]
    InvalidEndOfQuotedString(char),
}

/// A tokenizer failure and the cursor position where scanning stopped.
///
/// The view is not rolled back when this is returned; `index` is where
/// a caller resumes from (see [`View::skip_to_whitespace`]).
///
/// [`View::skip_to_whitespace`]: crate::View::skip_to_whitespace
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at index {index}")]
pub struct ParseError {
    pub(crate) kind: ErrorKind,
    pub(crate) index: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Character index of the cursor when the failure was detected.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

use crate::QuoteTable;

/// Configuration options for a [`View`](crate::View).
///
/// # Examples
///
/// ```rust
/// use cmdview::{View, ViewOptions};
///
/// let options = ViewOptions {
///     unicode_whitespace: false,
///     ..Default::default()
/// };
/// let mut view = View::with_options("a\u{3000}b c", options);
/// assert_eq!(view.get_word(), "a\u{3000}b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Quote pairs that open and close quoted tokens.
    ///
    /// # Default
    ///
    /// [`QuoteTable::DEFAULT`]
    pub quotes: &'static QuoteTable,

    /// Whether any Unicode whitespace separates tokens.
    ///
    /// Unicode whitespace here is `char::is_whitespace` plus the four
    /// information separators U+001C to U+001F.
    ///
    /// When `false`, only ASCII whitespace does: space, tab, line feed,
    /// carriage return, vertical tab and form feed. Characters such as
    /// U+3000 IDEOGRAPHIC SPACE then become ordinary token content.
    ///
    /// # Default
    ///
    /// `true`
    pub unicode_whitespace: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            quotes: &QuoteTable::DEFAULT,
            unicode_whitespace: true,
        }
    }
}

impl ViewOptions {
    pub(crate) fn is_whitespace(&self, ch: char) -> bool {
        if self.unicode_whitespace {
            ch.is_whitespace() || matches!(ch, '\x1C'..='\x1F')
        } else {
            matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
        }
    }
}

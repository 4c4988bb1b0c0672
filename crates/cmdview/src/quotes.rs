//! Opening/closing quote pairs recognised by the tokenizer.

/// Straight, curly, low-9, corner-bracket, fullwidth and guillemet pairs.
const STANDARD_PAIRS: &[(char, char)] = &[
    ('`', '`'),
    ('"', '"'),
    ('\u{2018}', '\u{2019}'), // ‘ ’
    ('\u{201A}', '\u{201B}'), // ‚ ‛
    ('\u{201C}', '\u{201D}'), // “ ”
    ('\u{201E}', '\u{201F}'), // „ ‟
    ('\u{2E42}', '\u{2E42}'), // ⹂
    ('\u{300C}', '\u{300D}'), // 「 」
    ('\u{300E}', '\u{300F}'), // 『 』
    ('\u{301D}', '\u{301E}'), // 〝 〞
    ('\u{FE41}', '\u{FE42}'), // ﹁ ﹂
    ('\u{FE43}', '\u{FE44}'), // ﹃ ﹄
    ('\u{FF02}', '\u{FF02}'), // ＂
    ('\u{FF62}', '\u{FF63}'), // ｢ ｣
    ('\u{00AB}', '\u{00BB}'), // « »
    ('\u{2039}', '\u{203A}'), // ‹ ›
    ('\u{300A}', '\u{300B}'), // 《 》
    ('\u{3008}', '\u{3009}'), // 〈 〉
    ('\'', '\''),
];

/// An immutable mapping from opening quote to closing quote.
///
/// Each opening character maps to exactly one closing character. A pair may
/// use the same character on both sides (`"…"`). The table is plain static
/// data; views hold a `&'static` reference to it.
///
/// ```rust
/// use cmdview::QuoteTable;
///
/// let quotes = &QuoteTable::DEFAULT;
/// assert_eq!(quotes.closing_for('«'), Some('»'));
/// assert_eq!(quotes.closing_for('»'), None);
/// assert!(quotes.is_quote('»'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTable {
    pairs: &'static [(char, char)],
}

impl QuoteTable {
    /// The nineteen pairs used by default.
    pub const DEFAULT: QuoteTable = QuoteTable::new(STANDARD_PAIRS);

    /// Builds a table from `(open, close)` pairs.
    ///
    /// Opening characters are expected to be unique; on duplicates the first
    /// pair wins.
    #[must_use]
    pub const fn new(pairs: &'static [(char, char)]) -> Self {
        Self { pairs }
    }

    /// Returns the closing quote for `open`, or `None` if `open` does not
    /// start a quoted token.
    #[must_use]
    pub fn closing_for(&self, open: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(o, _)| o == open)
            .map(|&(_, close)| close)
    }

    /// Whether `ch` is any quote character, opening or closing.
    #[must_use]
    pub fn is_quote(&self, ch: char) -> bool {
        self.pairs.iter().any(|&(o, c)| o == ch || c == ch)
    }

    /// All `(open, close)` pairs in table order.
    #[must_use]
    pub fn pairs(&self) -> &'static [(char, char)] {
        self.pairs
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for QuoteTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

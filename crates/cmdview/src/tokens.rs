use alloc::{string::String, vec::Vec};
use core::iter::FusedIterator;

use crate::{ParseError, View};

/// Iterator over the remaining tokens of a [`View`].
///
/// Created by [`View::tokens`].
#[derive(Debug)]
pub struct Tokens<'v, 'src> {
    view: &'v mut View<'src>,
    failed: bool,
}

impl<'v, 'src> Tokens<'v, 'src> {
    pub(crate) fn new(view: &'v mut View<'src>) -> Self {
        Self {
            view,
            failed: false,
        }
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.view.skip_whitespace();
        match self.view.get_quoted_word() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Splits `input` into tokens using the default quote table.
///
/// ```rust
/// let tokens = cmdview::split(r#"song 'Dry Out' «by DJVI» a\"b"#).unwrap();
/// assert_eq!(tokens, ["song", "Dry Out", "by DJVI", "a\"b"]);
/// ```
///
/// # Errors
///
/// Returns the first [`ParseError`] hit while scanning.
pub fn split(input: &str) -> Result<Vec<String>, ParseError> {
    View::new(input).tokens().collect()
}

//! A cursor over command-line style input.
//!
//! [`View`] walks a fixed input string and hands out one token per call:
//! bare words, or literals wrapped in any of the quote pairs listed in
//! [`QuoteTable`]. Inside a token a backslash escapes quote characters;
//! any other backslash is kept verbatim.
//!
//! ```rust
//! use cmdview::View;
//!
//! let mut view = View::new("level 'Bloodbath II' 10565740");
//! assert_eq!(view.get_word(), "level");
//! view.skip_whitespace();
//! assert_eq!(view.get_quoted_word().unwrap().as_deref(), Some("Bloodbath II"));
//! view.skip_whitespace();
//! assert_eq!(view.read_rest(), "10565740");
//! assert!(view.is_eof());
//! ```
//!
//! Callers that just want the whole token list can use [`split`] or
//! [`View::tokens`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod quotes;
mod tokens;
mod view;


pub use error::{ErrorKind, ParseError};
pub use options::ViewOptions;
pub use quotes::QuoteTable;
pub use tokens::{Tokens, split};
pub use view::View;

#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use cmdview::{QuoteTable, View, ViewOptions, split};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&str] = &[
    " ", "\t", "\n", "\r", "\u{1680}", "\u{2002}", "\u{2009}", "\u{3000}", "\x1F",
];

static WORD_TABLE: &[&str] = &["a", "level", "日本", "C:", "x1", "-", "!"];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// One building block of a generated command line.
#[derive(Debug, Arbitrary)]
enum Piece {
    Word(u8),
    Space(u8),
    Open(u8),
    Close(u8),
    Backslash,
    Text(String),
}

impl Piece {
    fn render(&self, out: &mut String) {
        let pairs = QuoteTable::DEFAULT.pairs();
        match self {
            Piece::Word(i) => out.push_str(WORD_TABLE[usize::from(*i) % WORD_TABLE.len()]),
            Piece::Space(i) => out.push_str(WS_TABLE[usize::from(*i) % WS_TABLE.len()]),
            Piece::Open(i) => out.push(pairs[usize::from(*i) % pairs.len()].0),
            Piece::Close(i) => out.push(pairs[usize::from(*i) % pairs.len()].1),
            Piece::Backslash => out.push('\\'),
            Piece::Text(s) => out.push_str(s),
        }
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if seed.is_multiple_of(4) {
        let bytes: Vec<u8> = with_rng(|rng| (0..64).map(|_| rng.random::<u8>()).collect());
        let Ok(pieces) = Vec::<Piece>::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) else {
            return fuzzer_mutate(data, size, max_size);
        };
        let mut command = String::new();
        for piece in &pieces {
            piece.render(&mut command);
        }
        let flags = with_rng(|rng| rng.random::<u8>());
        let len = (command.len() + 1).min(max_size);
        if len == 0 {
            return 0;
        }
        data[0] = flags;
        data[1..len].copy_from_slice(&command.as_bytes()[..len - 1]);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn tokenize(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };
    let input = String::from_utf8_lossy(data).into_owned();
    let options = ViewOptions {
        unicode_whitespace: flags & 1 == 0,
        ..Default::default()
    };

    // Token extraction never leaves the cursor past the end.
    let mut view = View::with_options(&input, options);
    loop {
        view.skip_whitespace();
        match view.get_quoted_word() {
            Ok(Some(_)) => assert!(view.index() <= view.len()),
            Ok(None) => break,
            Err(err) => {
                assert!(err.index() <= view.len());
                if !view.skip_to_whitespace() {
                    break;
                }
            }
        }
    }

    // Undo only remembers one step.
    view.undo();
    let once = view.index();
    view.undo();
    assert_eq!(once, view.index());

    // Bare words split on whitespace and the U+001C..=U+001F separators.
    let bare = !input
        .chars()
        .any(|ch| ch == '\\' || QuoteTable::DEFAULT.is_quote(ch));
    if bare {
        let tokens = split(&input).expect("bare words always tokenize");
        let expected: Vec<&str> = input
            .split(|ch: char| ch.is_whitespace() || matches!(ch, '\x1C'..='\x1F'))
            .filter(|w| !w.is_empty())
            .collect();
        assert_eq!(tokens, expected);
    }
}

fuzz_target!(|data: &[u8]| tokenize(data));

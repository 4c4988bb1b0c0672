//! Splits each line of stdin into tokens and prints them, one per line.
//!
//! ```text
//! echo "!song 'Dry Out' 467339" | cargo run --example split_command
//! ```
#![allow(missing_docs)]

use std::io::{self, BufRead};

use cmdview::View;

fn main() -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut view = View::new(&line);
        view.skip_literal("!");
        for token in view.tokens() {
            match token {
                Ok(token) => println!("{token}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    break;
                }
            }
        }
        println!("{view}");
    }
    Ok(())
}

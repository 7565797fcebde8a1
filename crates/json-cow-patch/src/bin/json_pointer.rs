//! `json-pointer` - print the value a JSON Pointer (RFC 6901) selects.
//!
//! Usage:
//!   json-pointer '<pointer>'
//!
//! The document is read from stdin.

use std::io::{self, Read, Write};
use std::process;

use json_cow_patch::cli::lookup_pointer;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let Some(pointer) = std::env::args().nth(1) else {
        fail("First argument must be a JSON pointer.");
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        fail(e);
    }

    match lookup_pointer(buf.trim(), &pointer) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                fail(e);
            }
        }
        Err(e) => fail(e),
    }
}

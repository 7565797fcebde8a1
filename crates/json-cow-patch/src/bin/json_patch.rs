//! `json-patch` - apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch [--no-validate] '<patch-array-json>'
//!
//! The document is read from stdin and the patched document is written to
//! stdout. `--no-validate` skips pointer syntax and size checks; banned keys
//! are still refused.

use std::io::{self, Read, Write};
use std::process;

use json_cow_patch::cli::apply_json_patch;
use json_cow_patch::ApplyPatchOptions;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let mut options = ApplyPatchOptions::default();
    let mut patch = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-validate" => options.validate = false,
            _ if patch.is_none() => patch = Some(arg),
            _ => fail(format!("unexpected argument {arg:?}")),
        }
    }
    let Some(patch) = patch else {
        fail("First argument must be a JSON patch array.");
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        fail(e);
    }

    match apply_json_patch(buf.trim(), &patch, &options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                fail(e);
            }
        }
        Err(e) => fail(e),
    }
}

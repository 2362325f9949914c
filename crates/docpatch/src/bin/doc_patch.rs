//! `doc-patch` — apply a patch batch to a JSON document.
//!
//! Usage:
//!   doc-patch '<patch-array-json>' < document.json
//!
//! The document is read from stdin; the patch requests are the first
//! argument. The patched document is printed to stdout.

use std::io::{self, Read, Write};

use docpatch::cli::apply_patch_json;

fn main() {
    let patch = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("Usage: doc-patch '<patch-array-json>' < document.json");
            std::process::exit(1);
        }
    };

    let mut doc = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut doc) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match apply_patch_json(doc.trim(), &patch) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

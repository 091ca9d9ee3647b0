use std::fs;
use std::io;

use crate::ook::HELLO_WORLD;

/// Outcome of trying to read a CLI argument as a file path.
#[derive(Debug)]
pub enum Source {
    FileRead(String),
    FileUnavailable(io::Error),
}

impl Source {
    /// Attempts a full read of `path`. The handle is closed before
    /// this returns, on success and failure alike.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Source::FileRead(contents),
            Err(err) => Source::FileUnavailable(err),
        }
    }
}

/// Resolves the optional CLI argument into Brainfuck source text,
/// returning the text and whether it came from a file.
///
/// An unavailable file is reinterpreted as literal source text. Any
/// read error takes that branch, not just "not found"; nothing is
/// reported to the user.
pub fn resolve(arg: Option<&str>) -> (String, bool) {
    match arg {
        Some(arg) => match Source::load(arg) {
            Source::FileRead(contents) => (contents, true),
            Source::FileUnavailable(_) => (arg.to_string(), false),
        },
        None => (HELLO_WORLD.to_string(), false),
    }
}

//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Blank lines are ignored and
//! surrounding whitespace is trimmed; no other validation happens here.

use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("lists/lv_guesses.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split list text into trimmed, non-empty lines
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

//! Word list loading utilities
//!
//! Normalizes raw dictionary lines into candidate words: trimmed, uppercased,
//! and restricted to plain ASCII letters. Possessives, hyphenated and accented
//! entries in system dictionaries are dropped here rather than in the
//! validator. Capitalized entries are kept and uppercased like any other word.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize one dictionary line
///
/// Returns `None` for blank lines and for entries containing anything other
/// than ASCII letters.
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::normalize;
///
/// assert_eq!(normalize("  boxed \n").as_deref(), Some("BOXED"));
/// assert_eq!(normalize("don't"), None);
/// assert_eq!(normalize(""), None);
/// ```
#[must_use]
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        None
    } else {
        Some(trimmed.to_ascii_uppercase())
    }
}

/// Load words from a file, one per line
///
/// Returns normalized words in file order, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize an iterator of raw lines
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines.into_iter().filter_map(normalize).collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_slice;
/// use letter_boxed::wordlists::SAMPLE_WORDS;
///
/// let words = words_from_slice(SAMPLE_WORDS);
/// assert_eq!(words.len(), SAMPLE_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

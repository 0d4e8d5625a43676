//! Field separator detection for delimited text.

use std::sync::LazyLock;

use regex::Regex;

/// Candidate separators, highest priority first.
pub const DELIMITERS: [char; 3] = ['|', '\t', ','];

/// Separator used when no candidate appears on the first line.
pub const DEFAULT_DELIMITER: char = ',';

static DELIMITER_PATTERNS: LazyLock<Vec<(char, Regex)>> = LazyLock::new(|| {
    DELIMITERS
        .iter()
        .map(|&delim| (delim, delimiter_pattern(delim)))
        .collect()
});

/// Pattern matching `delim` somewhere on the first line, after at least
/// one other character.
///
/// Header names are assumed not to contain the separator.
pub fn delimiter_pattern(delim: char) -> Regex {
    let pattern = format!("^[^\\n\\r]+{}", regex::escape(&delim.to_string()));
    Regex::new(&pattern).expect("escaped delimiter pattern is valid")
}

/// Guess the field separator of `content` from its first line.
///
/// Pipe beats tab beats comma; comma is also the fallback.
pub fn guess_delimiter(content: &str) -> char {
    DELIMITER_PATTERNS
        .iter()
        .find(|(_, rxp)| rxp.is_match(content))
        .map_or(DEFAULT_DELIMITER, |(delim, _)| *delim)
}

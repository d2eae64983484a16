//! Search patterns for picking productions and alternatives.
//!
//! Three modes, chosen by the pattern's quoting:
//! - `'text'`: candidate contains `text`
//! - `"text"`: candidate equals `text`
//! - `text`: the characters of `text` appear in the candidate, in order,
//!   not necessarily contiguous

use crate::utils::strip_delimiters;

/// A parsed search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    Substring(&'a str),
    Exact(&'a str),
    Subsequence(&'a str),
}

impl<'a> Pattern<'a> {
    pub fn parse(pattern: &'a str) -> Self {
        if let Some(inner) = quoted(pattern, "'") {
            return Pattern::Substring(inner);
        }
        if let Some(inner) = quoted(pattern, "\"") {
            return Pattern::Exact(inner);
        }
        Pattern::Subsequence(pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match *self {
            Pattern::Substring(needle) => candidate.contains(needle),
            Pattern::Exact(expected) => candidate == expected,
            Pattern::Subsequence(needle) => is_subsequence(needle, candidate),
        }
    }
}

/// Inner text of a pattern wrapped in `quote`, allowing an empty inner text.
fn quoted<'a>(pattern: &'a str, quote: &str) -> Option<&'a str> {
    if pattern == quote.repeat(2) {
        return Some("");
    }
    strip_delimiters(pattern, quote, quote)
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut wanted = needle.chars().peekable();
    for c in haystack.chars() {
        match wanted.peek() {
            None => break,
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
        }
    }
    wanted.peek().is_none()
}

/// Test `candidate` against a search pattern.
///
/// # Examples
/// ```
/// use prodgraph_core::matches;
/// assert!(matches("'cd'", "abcde"));
/// assert!(matches("\"abc\"", "abc"));
/// assert!(matches("ace", "abcde"));
/// assert!(!matches("aec", "abcde"));
/// ```
pub fn matches(pattern: &str, candidate: &str) -> bool {
    Pattern::parse(pattern).matches(candidate)
}

/// The only candidate satisfying `predicate`.
///
/// Returns `None` both when nothing matches and when more than one candidate
/// does; callers that need to tell these apart must count themselves.
pub fn single<T>(
    candidates: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<T> {
    let mut matching = candidates.into_iter().filter(|c| predicate(c));
    let first = matching.next()?;
    if matching.next().is_some() {
        return None;
    }
    Some(first)
}

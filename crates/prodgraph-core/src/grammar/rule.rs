//! Production rule model and single-rule parsing.

use std::fmt;

use crate::utils::strip_delimiters;

/// Token separating a rule's name from its alternatives.
pub const SEPARATOR: &str = "::=";

/// A production rule: `<name> ::= alt1 | alt2 | ...`.
///
/// Invariant: `alternatives` is non-empty and its first entry is non-empty.
/// Rules are immutable once built; re-parsing produces fresh values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    line: Option<usize>,
    name: String,
    alternatives: Vec<String>,
}

impl Rule {
    /// Build a rule, or `None` if the invariant does not hold.
    ///
    /// `name` excludes the angle brackets.
    pub fn new(
        line: Option<usize>,
        name: impl Into<String>,
        alternatives: Vec<String>,
    ) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || alternatives.first().is_none_or(|alt| alt.is_empty()) {
            return None;
        }
        Some(Self {
            line,
            name,
            alternatives,
        })
    }

    /// 1-based source line the rule block starts on (`None` for merged rules).
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Rule name without angle brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rule name with angle brackets, as it appears in alternatives.
    pub fn full_name(&self) -> String {
        format!("<{}>", self.name)
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", self.name, SEPARATOR)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " |")?;
            }
            write!(f, " {}", alt.replace('|', "\\|"))?;
        }
        Ok(())
    }
}

/// Parse a single rule from its (already concatenated) block text.
///
/// Returns `None` when the text is not a rule: the separator must occur
/// exactly once, the left side must be `<name>` with a non-empty name, and the
/// first alternative must be non-empty.
///
/// Alternatives are split at isolated pipes, meaning a `|` that is neither
/// doubled (`||`) nor escaped (`\|`). Escaped pipes become literal pipes.
/// Trailing empty alternatives are dropped.
pub fn parse_rule(line: Option<usize>, text: &str) -> Option<Rule> {
    let (lhs, rhs) = text.split_once(SEPARATOR)?;
    if rhs.contains(SEPARATOR) {
        return None;
    }
    let name = strip_delimiters(lhs.trim(), "<", ">")?;

    let mut alternatives: Vec<String> = split_isolated_pipes(rhs)
        .into_iter()
        .map(|alt| alt.trim().replace("\\|", "|"))
        .collect();
    while alternatives.len() > 1 && alternatives.last().is_some_and(|alt| alt.is_empty()) {
        alternatives.pop();
    }

    Rule::new(line, name, alternatives)
}

fn split_isolated_pipes(rhs: &str) -> Vec<&str> {
    let bytes = rhs.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'|' {
            continue;
        }
        let after_pipe_or_escape = i > 0 && matches!(bytes[i - 1], b'|' | b'\\');
        let before_pipe = bytes.get(i + 1) == Some(&b'|');
        if after_pipe_or_escape || before_pipe {
            continue;
        }
        parts.push(&rhs[start..i]);
        start = i + 1;
    }
    parts.push(&rhs[start..]);
    parts
}

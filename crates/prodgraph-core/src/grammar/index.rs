//! Derived lookups over a parsed rule set.

use indexmap::{IndexMap, IndexSet};

use super::rule::Rule;
use crate::utils::{is_nonterminal, strip_delimiters};

/// Split an alternative into the tokens that become tree nodes.
///
/// Each `<...>` run with at least one character between the brackets is one
/// token (spaces included); every other maximal run of non-whitespace
/// characters is one token.
///
/// # Examples
/// ```
/// use prodgraph_core::split_alternative;
/// assert_eq!(split_alternative("x<b> (y)"), ["x", "<b>", "(y)"]);
/// ```
pub fn split_alternative(alternative: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run: Option<usize> = None;
    let mut i = 0;

    while let Some(c) = alternative[i..].chars().next() {
        if c == '<' {
            if let Some(len) = nonterminal_len(&alternative[i..]) {
                if let Some(start) = run.take() {
                    tokens.push(&alternative[start..i]);
                }
                tokens.push(&alternative[i..i + len]);
                i += len;
                continue;
            }
        }
        if c.is_whitespace() {
            if let Some(start) = run.take() {
                tokens.push(&alternative[start..i]);
            }
        } else if run.is_none() {
            run = Some(i);
        }
        i += c.len_utf8();
    }
    if let Some(start) = run {
        tokens.push(&alternative[start..]);
    }

    tokens
}

/// Byte length of the `<...>` token at the start of `s`, if any.
fn nonterminal_len(s: &str) -> Option<usize> {
    let first = s[1..].chars().next()?;
    let body_start = 1 + first.len_utf8();
    let close = s[body_start..].find('>')?;
    Some(body_start + close + 1)
}

/// Spacing-independent form of an alternative: its tokens concatenated, with
/// the whitespace inside `<...>` tokens dropped too.
///
/// # Examples
/// ```
/// use prodgraph_core::normalize;
/// assert_eq!(normalize("<x  y> + z"), "<xy>+z");
/// ```
pub fn normalize(alternative: &str) -> String {
    split_alternative(alternative)
        .into_iter()
        .flat_map(|token| token.chars().filter(|c| !c.is_whitespace()))
        .collect()
}

/// Merge every rule named `full_name` (with brackets) into one synthetic rule.
///
/// Alternatives keep document order across duplicate definitions. The merged
/// rule has no line number.
pub fn merge_by_name(rules: &[Option<Rule>], full_name: &str) -> Option<Rule> {
    let name = strip_delimiters(full_name, "<", ">")?;
    let alternatives: Vec<String> = rules
        .iter()
        .flatten()
        .filter(|rule| rule.name() == name)
        .flat_map(|rule| rule.alternatives().iter().cloned())
        .collect();
    Rule::new(None, name, alternatives)
}

/// Map each normalized alternative to the full names of the rules producing it.
pub fn reverse_index(rules: &[Option<Rule>]) -> IndexMap<String, IndexSet<String>> {
    let mut producers: IndexMap<String, IndexSet<String>> = IndexMap::new();
    for rule in rules.iter().flatten() {
        let full_name = rule.full_name();
        for alt in rule.alternatives() {
            producers
                .entry(normalize(alt))
                .or_default()
                .insert(full_name.clone());
        }
    }
    producers
}

/// Read-only lookups over one parsed rule set.
///
/// Rebuild it whenever the grammar text changes; it is never updated
/// incrementally.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    /// Full name to merged rule, in order of first definition.
    rules: IndexMap<String, Rule>,
    /// Normalized alternative to producing rule names.
    producers: IndexMap<String, IndexSet<String>>,
    /// Normalized alternative to the first raw alternative spelling it.
    spellings: IndexMap<String, String>,
    /// Normalized non-terminal token to the rules whose alternatives mention it.
    mentions: IndexMap<String, IndexSet<String>>,
}

impl RuleIndex {
    pub fn build(rules: &[Option<Rule>]) -> Self {
        let mut merged: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut spellings = IndexMap::new();
        let mut mentions: IndexMap<String, IndexSet<String>> = IndexMap::new();

        for rule in rules.iter().flatten() {
            let full_name = rule.full_name();
            for alt in rule.alternatives() {
                let tokens = split_alternative(alt);
                spellings
                    .entry(normalize(alt))
                    .or_insert_with(|| alt.clone());
                for token in tokens.into_iter().filter(|t| is_nonterminal(t)) {
                    mentions
                        .entry(normalize(token))
                        .or_default()
                        .insert(full_name.clone());
                }
            }
            merged
                .entry(full_name)
                .or_default()
                .extend(rule.alternatives().iter().cloned());
        }

        let rules_by_name = merged
            .into_iter()
            .filter_map(|(full_name, alternatives)| {
                let name = strip_delimiters(&full_name, "<", ">")?.to_owned();
                Some((full_name, Rule::new(None, name, alternatives)?))
            })
            .collect();

        Self {
            rules: rules_by_name,
            producers: reverse_index(rules),
            spellings,
            mentions,
        }
    }

    /// Merged rule for a full name (`<name>`).
    pub fn rule(&self, full_name: &str) -> Option<&Rule> {
        self.rules.get(full_name)
    }

    /// Rules with an alternative normalizing to `value`.
    pub fn producers(&self, value: &str) -> Option<&IndexSet<String>> {
        self.producers.get(value)
    }

    /// Rules with an alternative containing the non-terminal token `name`
    /// (normalized).
    pub fn mentioning(&self, name: &str) -> Option<&IndexSet<String>> {
        self.mentions.get(name)
    }

    /// First raw alternative whose normalized form is `value`.
    pub fn spelling(&self, value: &str) -> Option<&str> {
        self.spellings.get(value).map(String::as_str)
    }

    /// All normalized values, in order of first appearance.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.producers.keys().map(String::as_str)
    }

    /// Number of distinct normalized values.
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}

//! Splitting grammar text into rule blocks.

use super::rule::{Rule, SEPARATOR, parse_rule};

/// One rule block of the source text.
///
/// A block starts at a line containing [`SEPARATOR`] and ends at the next
/// blank line or the next separator line. Its lines are concatenated without
/// inserted separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// 1-based line the block starts on.
    pub line: usize,
    /// Concatenated block text.
    pub text: String,
    /// Parsed rule, `None` if the block is malformed.
    pub rule: Option<Rule>,
}

impl RuleBlock {
    fn new(line: usize, text: String) -> Self {
        let rule = parse_rule(Some(line), &text);
        Self { line, text, rule }
    }

    pub fn is_malformed(&self) -> bool {
        self.rule.is_none()
    }
}

/// Split grammar text into rule blocks, in source order.
///
/// Lines before the first separator line, and between a blank line and the
/// next separator line, belong to no block and are ignored.
pub fn parse_blocks(text: &str) -> Vec<RuleBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some((start, buf)) = current.take() {
                blocks.push(RuleBlock::new(start, buf));
            }
        }
        if line.contains(SEPARATOR) {
            if let Some((start, buf)) = current.take() {
                blocks.push(RuleBlock::new(start, buf));
            }
            current = Some((i + 1, String::new()));
        }
        if let Some((_, buf)) = current.as_mut() {
            buf.push_str(line);
        }
    }
    if let Some((start, buf)) = current {
        blocks.push(RuleBlock::new(start, buf));
    }

    blocks
}

/// Parse grammar text into rules, one slot per block.
///
/// Malformed blocks yield `None` rather than aborting the parse.
pub fn parse_rules(text: &str) -> Vec<Option<Rule>> {
    parse_blocks(text)
        .into_iter()
        .map(|block| block.rule)
        .collect()
}

/// Source lines of the valid rules, in order.
pub fn rule_lines(rules: &[Option<Rule>]) -> Vec<usize> {
    rules.iter().flatten().filter_map(Rule::line).collect()
}

/// The valid rule with the given 1-based ordinal, skipping absent slots.
pub fn nth_rule(rules: &[Option<Rule>], number: usize) -> Option<&Rule> {
    rules.iter().flatten().nth(number.checked_sub(1)?)
}

/// Render all present rules, one per line.
pub fn render_rules(rules: &[Option<Rule>]) -> String {
    rules
        .iter()
        .flatten()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

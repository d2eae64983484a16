//! Production rule grammar.
//!
//! Grammar text is a sequence of rule blocks of the form
//! `<name> ::= alt1 | alt2 | ...`. Parsing never fails as a whole: a block
//! that is not a well-formed rule occupies an absent (`None`) slot so callers
//! can still number the valid rules by source line.
//!
//! [`RuleIndex`] is a derived, read-only view used for backward lookups from a
//! produced value to the rules that can produce it. It is cheap to rebuild and
//! is rebuilt from the current text before every query.

mod index;
mod reader;
mod rule;


pub use index::{RuleIndex, merge_by_name, normalize, reverse_index, split_alternative};
pub use reader::{RuleBlock, nth_rule, parse_blocks, parse_rules, render_rules, rule_lines};
pub use rule::{Rule, SEPARATOR, parse_rule};

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for building derivation trees from production rules.
//!
//! Three layers:
//! - **Grammar**: rule text parsing (`<name> ::= a | b`) and the derived
//!   [`RuleIndex`] used for backward lookups
//! - **Tree**: the mutable, parent-linked [`DerivationGraph`] and its printers
//! - **Resolution**: [`simple_path`] and [`expand`], which splice productions
//!   into the tree
//!
//! The [`session`] module layers the interactive command grammar on top.
//!
//! # Example
//!
//! ```
//! use prodgraph_core::{DerivationGraph, RuleIndex, parse_rules, simple_path};
//!
//! let rules = parse_rules("<a> ::= <b>\n<b> ::= y z");
//! let index = RuleIndex::build(&rules);
//!
//! let mut graph = DerivationGraph::new();
//! let root = graph.new_node("<a>");
//! simple_path(&mut graph, &index, root, "yz").unwrap();
//! assert_eq!(graph.len(), 4);
//! ```

pub mod colors;
pub mod grammar;
pub mod pattern;
pub mod resolve;
pub mod session;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod lib_tests;

pub use colors::Colors;
pub use grammar::{
    Rule, RuleBlock, RuleIndex, merge_by_name, normalize, nth_rule, parse_blocks, parse_rule,
    parse_rules, render_rules, rule_lines, split_alternative,
};
pub use pattern::{Pattern, matches, single};
pub use resolve::{Resolution, ResolveError, expand, simple_path};
pub use session::{Command, CommandError, Mode, RenderMode, Session, SessionError};
pub use tree::{DerivationGraph, DotPrinter, GraphError, NodeId, TreePrinter};
pub use utils::is_nonterminal;

/// Errors surfaced by prodgraph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rule block could not be parsed. Only strict callers report this;
    /// the parser itself skips malformed blocks.
    #[error("malformed rule at line {line}")]
    MalformedRule { line: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type for prodgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Splicing productions into a derivation graph.
//!
//! [`expand`] hangs the tokens of one alternative under a node.
//! [`simple_path`] searches the [`RuleIndex`] backward from a value matching a
//! pattern until it reaches the label of the source node, then materializes
//! the chain it walked. Every step of the walk must be unambiguous; the search
//! never guesses.

use indexmap::IndexSet;
use tracing::debug;

use crate::grammar::{RuleIndex, normalize, split_alternative};
use crate::pattern::Pattern;
use crate::tree::{DerivationGraph, GraphError, NodeId};
use crate::utils::is_nonterminal;

/// Errors from path resolution.
///
/// None of these leave the graph modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("pattern is the node label `{0}` itself")]
    TrivialTarget(String),

    #[error("pattern `{pattern}` must match exactly one value, matched {matches}")]
    AmbiguousOrMissingSeed { pattern: String, matches: usize },

    #[error("`{value}` must have exactly one unvisited producer, found {candidates}")]
    AmbiguousOrMultiplePaths { value: String, candidates: usize },

    #[error("nothing produces `{value}`")]
    NoPath { value: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Nodes created by a successful [`simple_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Intermediate nodes, from the child of the source down to the node the
    /// alternative was expanded under.
    pub chain: Vec<NodeId>,
    /// Tokens of the matched alternative, left to right.
    pub expanded: Vec<NodeId>,
}

impl Resolution {
    /// Newly created non-terminals that still need expanding, left to right.
    pub fn incomplete<'a>(
        &'a self,
        graph: &'a DerivationGraph,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.expanded
            .iter()
            .copied()
            .filter(|&id| graph.label(id).is_some_and(is_nonterminal))
    }
}

/// Create one child of `parent` per token of `alternative`, in token order.
///
/// Returns the new IDs. Fails before creating anything if `parent` does not
/// exist.
pub fn expand(
    graph: &mut DerivationGraph,
    alternative: &str,
    parent: NodeId,
) -> Result<Vec<NodeId>, GraphError> {
    if !graph.contains(parent) {
        return Err(GraphError::UnknownNode(parent));
    }

    let mut created = Vec::new();
    for token in split_alternative(alternative) {
        let id = graph.new_node(token);
        graph.add_link(parent, id)?;
        created.push(id);
    }
    debug!(parent, count = created.len(), "expanded alternative");
    Ok(created)
}

/// Connect `source` to the unique alternative matching `pattern`.
///
/// The pattern is compared against normalized alternatives, so spacing in the
/// pattern does not matter. On success the chain of intermediate rule names
/// is inserted below `source` and the matched alternative is expanded under
/// the deepest of them.
pub fn simple_path(
    graph: &mut DerivationGraph,
    index: &RuleIndex,
    source: NodeId,
    pattern: &str,
) -> Result<Resolution, ResolveError> {
    let target = graph
        .label(source)
        .ok_or(ResolveError::UnknownNode(source))?
        .to_owned();
    if pattern.trim() == target {
        return Err(ResolveError::TrivialTarget(target));
    }

    let chain = find_chain(index, &target, pattern)?;
    materialize(graph, index, source, &chain)
}

/// Walk from the seed value back to `target`.
///
/// The first element is the matched value; the rest are rule names, nearest
/// the match first. `target` itself is never included. Names are compared in
/// normalized form, so `<x y>` and `<x  y>` are the same symbol.
fn find_chain(index: &RuleIndex, target: &str, pattern: &str) -> Result<Vec<String>, ResolveError> {
    let normalized = normalize(pattern);
    let matcher = Pattern::parse(&normalized);
    let seeds: Vec<&str> = index.values().filter(|v| matcher.matches(v)).collect();
    let [seed] = seeds[..] else {
        return Err(ResolveError::AmbiguousOrMissingSeed {
            pattern: pattern.to_owned(),
            matches: seeds.len(),
        });
    };
    debug!(seed, "path seed");

    let target = normalize(target);
    let mut chain = vec![seed.to_owned()];
    let mut visited: IndexSet<&str> = IndexSet::new();
    let mut value = seed;
    let mut key = seed.to_owned();

    while key != target {
        let producers = index
            .producers(&key)
            .or_else(|| {
                is_nonterminal(value)
                    .then(|| index.mentioning(&key))
                    .flatten()
            })
            .ok_or_else(|| ResolveError::NoPath {
                value: value.to_owned(),
            })?;

        let candidates: Vec<&str> = producers
            .iter()
            .map(String::as_str)
            .filter(|name| !visited.contains(name))
            .collect();
        let [next] = candidates[..] else {
            return Err(ResolveError::AmbiguousOrMultiplePaths {
                value: value.to_owned(),
                candidates: candidates.len(),
            });
        };

        debug!(from = value, to = next, "path step");
        visited.insert(next);
        value = next;
        key = normalize(value);
        if key != target {
            chain.push(value.to_owned());
        }
    }

    Ok(chain)
}

fn materialize(
    graph: &mut DerivationGraph,
    index: &RuleIndex,
    source: NodeId,
    chain: &[String],
) -> Result<Resolution, ResolveError> {
    let Some((seed, names)) = chain.split_first() else {
        return Ok(Resolution::default());
    };

    let mut resolution = Resolution::default();
    let mut parent = source;
    for name in names.iter().rev() {
        let id = graph.new_node(name.as_str());
        graph.add_link(parent, id)?;
        resolution.chain.push(id);
        parent = id;
    }

    let alternative = index.spelling(seed).unwrap_or(seed);
    resolution.expanded = expand(graph, alternative, parent)?;
    debug!(
        source,
        intermediates = resolution.chain.len(),
        "path materialized"
    );
    Ok(resolution)
}

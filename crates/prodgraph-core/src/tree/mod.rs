//! Derivation trees under construction.
//!
//! The tree is an arena: labels and parent links live in two parallel vectors
//! indexed by [`NodeId`]. Ids are handed out sequentially and never reused, so
//! a deleted node leaves an empty slot behind.
//!
//! # Architecture
//!
//! ```text
//! DerivationGraph ──→ DotPrinter  (graph description for the layout tool)
//!                 └─→ TreePrinter (indented text for terminals)
//! ```

mod dot;
mod graph;
mod printer;

#[cfg(test)]
mod graph_proptests;

pub use dot::DotPrinter;
pub use graph::{DerivationGraph, GraphError, NodeId};
pub use printer::TreePrinter;

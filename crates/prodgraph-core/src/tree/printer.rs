//! Indented text rendering of a derivation graph.

use std::fmt::Write;

use super::{DerivationGraph, NodeId};
use crate::Colors;

/// Prints every root and its descendants, two spaces per level.
pub struct TreePrinter<'a> {
    graph: &'a DerivationGraph,
    show_ids: bool,
    colors: Colors,
}

impl<'a> TreePrinter<'a> {
    pub fn new(graph: &'a DerivationGraph) -> Self {
        Self {
            graph,
            show_ids: true,
            colors: Colors::OFF,
        }
    }

    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let roots: Vec<NodeId> = self.graph.roots().collect();
        stack.extend(roots.into_iter().rev().map(|id| (id, 0)));

        while let Some((id, depth)) = stack.pop() {
            let Some(label) = self.graph.label(id) else {
                continue;
            };
            let c = &self.colors;
            write!(w, "{:indent$}", "", indent = depth * 2)?;
            if self.show_ids {
                write!(w, "{}{id}{} ", c.dim, c.reset)?;
            }
            writeln!(w, "{}{label}{}", c.for_label(label), c.reset)?;

            let children: Vec<NodeId> = self.graph.children(id).collect();
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }

        Ok(())
    }
}

impl DerivationGraph {
    /// Create a text tree printer for this graph.
    pub fn tree_printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}

//! Graph description output for the external layout tool.
//!
//! Produces an undirected graph in the dot language:
//!
//! ```text
//! graph G {
//! 0 [label="0: <S>" shape=plain]
//! 1 [label="b" shape=plain]
//! 0 -- 1
//! }
//! ```

use std::fmt::Write;

use super::{DerivationGraph, NodeId};
use crate::utils::is_nonterminal;

/// Printer for `DerivationGraph` with configurable output options.
pub struct DotPrinter<'a> {
    graph: &'a DerivationGraph,
    show_ids: bool,
    show_terminal_ids: bool,
    highlight: Option<NodeId>,
}

impl<'a> DotPrinter<'a> {
    pub fn new(graph: &'a DerivationGraph) -> Self {
        Self {
            graph,
            show_ids: false,
            show_terminal_ids: false,
            highlight: None,
        }
    }

    /// Prefix non-terminal labels with their node ID.
    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    /// Prefix terminal labels with their node ID too. Implies `show_ids`.
    pub fn show_terminal_ids(mut self, show: bool) -> Self {
        self.show_terminal_ids = show;
        self
    }

    /// Draw a box around this node. Only applies while IDs are shown.
    pub fn highlight(mut self, id: Option<NodeId>) -> Self {
        self.highlight = id;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let show_ids = self.show_ids || self.show_terminal_ids;

        writeln!(w, "graph G {{")?;

        for (id, label) in self.graph.iter() {
            let escaped = escape(label);
            if show_ids && (self.show_terminal_ids || is_nonterminal(label)) {
                write!(w, "{id} [label=\"{id}: {escaped}\"")?;
            } else {
                write!(w, "{id} [label=\"{escaped}\"")?;
            }
            let shape = if show_ids && self.highlight == Some(id) {
                "box"
            } else {
                "plain"
            };
            writeln!(w, " shape={shape}]")?;
        }

        for (parent, child) in self.graph.links() {
            writeln!(w, "{parent} -- {child}")?;
        }

        writeln!(w, "}}")
    }
}

/// Escape a label for use inside a double-quoted dot string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl DerivationGraph {
    /// Create a dot printer for this graph.
    pub fn dot_printer(&self) -> DotPrinter<'_> {
        DotPrinter::new(self)
    }

    /// Render the graph description in one call.
    pub fn export(
        &self,
        show_ids: bool,
        show_terminal_ids: bool,
        highlight: Option<NodeId>,
    ) -> String {
        self.dot_printer()
            .show_ids(show_ids)
            .show_terminal_ids(show_terminal_ids)
            .highlight(highlight)
            .dump()
    }
}

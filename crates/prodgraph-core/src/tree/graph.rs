//! Arena-backed derivation graph.

use std::collections::BTreeSet;

use crate::utils::is_nonterminal;

/// Index into `DerivationGraph` slots.
pub type NodeId = u32;

/// Errors from graph mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("linking {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

/// A forest of labelled nodes with single-parent links.
///
/// Invariant: every stored parent link joins two live nodes, and following
/// parent links from any node terminates.
#[derive(Debug, Clone, Default)]
pub struct DerivationGraph {
    labels: Vec<Option<String>>,
    parents: Vec<Option<NodeId>>,
}

impl DerivationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parentless node, returning its ID.
    pub fn new_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.labels.len() as NodeId;
        let label = label.into();
        tracing::trace!(id, label = %label, "new node");
        self.labels.push(Some(label));
        self.parents.push(None);
        id
    }

    /// ID the next created node will get.
    pub fn next_id(&self) -> NodeId {
        self.labels.len() as NodeId
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.label(id).is_some()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id as usize)?.as_deref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id as usize).copied().flatten()
    }

    /// Children of `id` in ascending ID order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.links()
            .filter(move |&(parent, _)| parent == id)
            .map(|(_, child)| child)
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.children(id).next().is_some()
    }

    /// Live nodes without a parent, in ascending ID order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .map(|(id, _)| id)
            .filter(|&id| self.parent(id).is_none())
    }

    /// Iterate over live nodes with their labels.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, label)| Some((i as NodeId, label.as_deref()?)))
    }

    /// Iterate over `(parent, child)` links, ordered by child ID.
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| Some(((*parent)?, child as NodeId)))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.labels.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make `parent` the parent of `child`, replacing any previous parent.
    ///
    /// Both nodes must exist, and `child` must not be `parent` or one of its
    /// ancestors.
    pub fn add_link(&mut self, parent: NodeId, child: NodeId) -> Result<(), GraphError> {
        self.ensure(parent)?;
        self.ensure(child)?;

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(GraphError::Cycle { parent, child });
            }
            ancestor = self.parent(id);
        }

        tracing::trace!(parent, child, "link");
        self.parents[child as usize] = Some(parent);
        Ok(())
    }

    /// Remove the parent link of `child`, returning the former parent.
    pub fn unlink(&mut self, child: NodeId) -> Option<NodeId> {
        let parent = self.parents.get_mut(child as usize)?.take();
        if let Some(parent) = parent {
            tracing::trace!(parent, child, "unlink");
        }
        parent
    }

    /// Delete a node and, transitively, all of its descendants.
    ///
    /// Returns the former parent of `id` itself (not of its descendants).
    pub fn delete(&mut self, id: NodeId) -> Result<Option<NodeId>, GraphError> {
        self.ensure(id)?;
        let parent = self.unlink(id);

        let mut pending = vec![id];
        while let Some(node) = pending.pop() {
            pending.extend(self.children(node));
            self.labels[node as usize] = None;
            self.parents[node as usize] = None;
        }

        tracing::debug!(id, ?parent, "deleted subtree");
        Ok(parent)
    }

    /// Non-terminal placeholders that have no children yet.
    pub fn incomplete(&self) -> BTreeSet<NodeId> {
        let parents: BTreeSet<NodeId> = self.links().map(|(parent, _)| parent).collect();
        self.iter()
            .filter(|&(id, label)| is_nonterminal(label) && !parents.contains(&id))
            .map(|(id, _)| id)
            .collect()
    }

    fn ensure(&self, id: NodeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}

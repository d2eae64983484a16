//! Interactive editing session.
//!
//! A [`Session`] pairs grammar text with one derivation graph and tracks a
//! queue of "relevant" nodes, the ones most likely to need attention next.
//! Commands either act on the graph directly or switch into a selection mode
//! where one alternative of a node's rule is picked and expanded.

mod command;

#[cfg(test)]
mod session_tests;

pub use command::{Command, CommandError, RenderMode};

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::Colors;
use crate::grammar::{Rule, RuleIndex, merge_by_name, nth_rule, parse_blocks, parse_rules};
use crate::pattern::matches;
use crate::resolve::{Resolution, ResolveError, expand, simple_path};
use crate::tree::{DerivationGraph, GraphError, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no production rule number {0}")]
    InvalidRuleNumber(usize),

    #[error("no production rule for node {node}")]
    NoRule { node: NodeId },

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("no alternative number {0}")]
    InvalidChoice(usize),

    #[error("pattern `{pattern}` must match exactly one alternative, matched {matches}")]
    NoQuickMatch { pattern: String, matches: usize },

    #[error("no relevant node")]
    NoRelevantNode,

    #[error("not choosing an alternative")]
    NotSelecting,

    #[error("choose an alternative or cancel first")]
    Selecting,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// What bare numbers and the quick keys currently act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    /// Choosing one of `rule`'s alternatives to expand under `node`.
    Selecting { node: NodeId, rule: Rule },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    grammar: String,
    graph: DerivationGraph,
    relevant: VecDeque<NodeId>,
    mode: Mode,
    render: RenderMode,
}

impl Session {
    pub fn new(grammar: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.set_grammar(grammar);
        session
    }

    /// Replace the grammar text. The graph is kept as is.
    pub fn set_grammar(&mut self, grammar: impl Into<String>) {
        self.grammar = grammar.into();
        for block in parse_blocks(&self.grammar) {
            if block.is_malformed() {
                warn!(line = block.line, text = %block.text, "skipping malformed rule");
            }
        }
    }

    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    pub fn graph(&self) -> &DerivationGraph {
        &self.graph
    }

    /// Relevant nodes, front first.
    pub fn relevant(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.relevant.iter().copied()
    }

    /// Front of the relevant queue.
    pub fn focused(&self) -> Option<NodeId> {
        self.relevant.front().copied()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render
    }

    /// Rules parsed from the current text.
    pub fn rules(&self) -> Vec<Option<Rule>> {
        parse_rules(&self.grammar)
    }

    /// Parse and execute one command line.
    pub fn run(&mut self, line: &str) -> crate::Result<()> {
        let command = Command::parse(line)?;
        self.execute(&command)?;
        Ok(())
    }

    pub fn execute(&mut self, command: &Command) -> Result<(), SessionError> {
        debug!(?command, "execute");
        if matches!(self.mode, Mode::Selecting { .. }) {
            return self.execute_selecting(command);
        }

        match command {
            Command::Nothing => {}
            Command::NewNode { rule } => {
                let rules = self.rules();
                let rule = nth_rule(&rules, *rule).ok_or(SessionError::InvalidRuleNumber(*rule))?;
                let id = self.graph.new_node(rule.full_name());
                self.relevant.push_back(id);
            }
            Command::Unlink { node } => {
                self.ensure(*node)?;
                if let Some(parent) = self.graph.unlink(*node) {
                    self.push_back(parent);
                }
            }
            Command::Focus { node } => {
                self.ensure(*node)?;
                self.remove(*node);
                self.relevant.push_front(*node);
            }
            Command::Delete { node } => {
                let parent = self.graph.delete(*node)?;
                let graph = &self.graph;
                self.relevant.retain(|&id| graph.contains(id));
                if let Some(parent) = parent {
                    self.push_back(parent);
                }
            }
            Command::Recompute => {
                self.relevant = self.graph.incomplete().into_iter().collect();
            }
            Command::Index(node) => self.start_selection(*node)?,
            Command::Expand => {
                let node = self.focused().ok_or(SessionError::NoRelevantNode)?;
                self.start_selection(node)?;
            }
            Command::Link { parent, child } => {
                self.graph.add_link(*parent, *child)?;
                self.remove(*parent);
            }
            Command::Path { node, pattern } => {
                let source = node
                    .or_else(|| self.focused())
                    .ok_or(SessionError::NoRelevantNode)?;
                self.resolve(source, pattern)?;
            }
            Command::Quick { pattern } => {
                let source = self.focused().ok_or(SessionError::NoRelevantNode)?;
                self.resolve(source, pattern)?;
            }
            Command::Skip => {
                self.relevant.pop_front();
            }
            Command::Cancel | Command::First | Command::Last => {
                return Err(SessionError::NotSelecting);
            }
            Command::Render(mode) => self.render = *mode,
        }
        Ok(())
    }

    fn execute_selecting(&mut self, command: &Command) -> Result<(), SessionError> {
        let Mode::Selecting { rule, .. } = &self.mode else {
            return Err(SessionError::NotSelecting);
        };
        let count = rule.alternatives().len();

        match command {
            Command::Nothing => {}
            Command::Cancel | Command::Skip => self.mode = Mode::Idle,
            Command::Index(n) => self.choose(*n as usize)?,
            Command::First => self.choose(1)?,
            Command::Last | Command::Expand => self.choose(count)?,
            Command::Quick { pattern } => {
                let hits: Vec<usize> = rule
                    .alternatives()
                    .iter()
                    .enumerate()
                    .filter(|(_, alt)| matches(pattern, alt))
                    .map(|(i, _)| i + 1)
                    .collect();
                let [number] = hits[..] else {
                    return Err(SessionError::NoQuickMatch {
                        pattern: pattern.clone(),
                        matches: hits.len(),
                    });
                };
                self.choose(number)?;
            }
            Command::Render(mode) => self.render = *mode,
            _ => return Err(SessionError::Selecting),
        }
        Ok(())
    }

    fn start_selection(&mut self, node: NodeId) -> Result<(), SessionError> {
        let label = self.graph.label(node).ok_or(SessionError::UnknownNode(node))?;
        let rule = merge_by_name(&self.rules(), label).ok_or(SessionError::NoRule { node })?;
        debug!(node, rule = rule.name(), "selecting");
        self.mode = Mode::Selecting { node, rule };
        Ok(())
    }

    /// Expand the 1-based alternative `number` of the rule being selected.
    ///
    /// An out-of-range number keeps the session selecting.
    fn choose(&mut self, number: usize) -> Result<(), SessionError> {
        let Mode::Selecting { node, rule } = &self.mode else {
            return Err(SessionError::NotSelecting);
        };
        let node = *node;
        let alternative = number
            .checked_sub(1)
            .and_then(|i| rule.alternatives().get(i))
            .ok_or(SessionError::InvalidChoice(number))?
            .clone();

        let expanded = Resolution {
            chain: Vec::new(),
            expanded: expand(&mut self.graph, &alternative, node)?,
        };
        self.remove(node);
        self.push_front_incomplete(&expanded);
        self.mode = Mode::Idle;
        Ok(())
    }

    fn resolve(&mut self, source: NodeId, pattern: &str) -> Result<(), SessionError> {
        let index = RuleIndex::build(&self.rules());
        let resolution = simple_path(&mut self.graph, &index, source, pattern)?;
        self.remove(source);
        // Chain nodes already have children, so only the expanded tokens queue.
        self.push_front_incomplete(&resolution);
        Ok(())
    }

    /// Queue the new non-terminals at the front, leftmost first.
    fn push_front_incomplete(&mut self, resolution: &Resolution) {
        let fresh: Vec<NodeId> = resolution.incomplete(&self.graph).collect();
        for id in fresh.into_iter().rev() {
            self.relevant.push_front(id);
        }
    }

    fn push_back(&mut self, id: NodeId) {
        self.remove(id);
        self.relevant.push_back(id);
    }

    fn remove(&mut self, id: NodeId) {
        self.relevant.retain(|&n| n != id);
    }

    fn ensure(&self, id: NodeId) -> Result<(), SessionError> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(SessionError::UnknownNode(id))
        }
    }

    /// Graph description in the current render mode, focused node boxed.
    pub fn dot(&self) -> String {
        let (show_ids, show_terminal_ids) = self.render.id_flags();
        self.graph.export(show_ids, show_terminal_ids, self.focused())
    }

    /// Indented text tree in the current render mode.
    pub fn tree(&self, colors: Colors) -> String {
        self.graph
            .tree_printer()
            .show_ids(self.render != RenderMode::Plain)
            .colored(colors)
            .dump()
    }
}

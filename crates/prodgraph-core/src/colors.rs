//! Terminal styling for derivation trees and rule listings.
//!
//! Non-terminals are blue, terminals green, and ids, line numbers and other
//! bookkeeping are dimmed.

use crate::utils::is_nonterminal;

/// Escape sequences for each kind of output, or empty strings when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub nonterminal: &'static str,
    pub terminal: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        nonterminal: "\x1b[34m",
        terminal: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        nonterminal: "",
        terminal: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Style for a node label, picked by whether it is a non-terminal.
    pub fn for_label(&self, label: &str) -> &'static str {
        if is_nonterminal(label) {
            self.nonterminal
        } else {
            self.terminal
        }
    }
}

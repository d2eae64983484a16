//! Line-oriented editing commands.

use crate::tree::NodeId;

/// How much detail the rendered graph carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// IDs on non-terminals, focused node boxed.
    #[default]
    Ids,
    /// Labels only.
    Plain,
    /// IDs on every node.
    Full,
}

impl RenderMode {
    /// `(show_ids, show_terminal_ids)` for the dot printer.
    pub fn id_flags(self) -> (bool, bool) {
        match self {
            RenderMode::Ids => (true, false),
            RenderMode::Plain => (false, false),
            RenderMode::Full => (true, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("missing pattern")]
    MissingPattern,

    #[error("unknown command `{0}`")]
    Unknown(String),
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line or `#` comment.
    Nothing,
    /// `+R`: new root labelled with valid rule number `R`.
    NewNode { rule: usize },
    /// `~N`
    Unlink { node: NodeId },
    /// `=N`: move `N` to the front of the relevant queue.
    Focus { node: NodeId },
    /// `-N`: delete `N` and its descendants.
    Delete { node: NodeId },
    /// `-`
    Cancel,
    /// `*`: rebuild the relevant queue from the incomplete nodes.
    Recompute,
    /// A bare number: select a node, or choose an alternative while selecting.
    Index(u32),
    /// `P C`, `P -- C` or `P -> C`.
    Link { parent: NodeId, child: NodeId },
    /// `s N PATTERN`, or `/PATTERN` to start from the focused node.
    Path {
        node: Option<NodeId>,
        pattern: String,
    },
    /// `?PATTERN`
    Quick { pattern: String },
    /// `.`
    Expand,
    /// `<`
    First,
    /// `>`
    Last,
    /// `^`
    Skip,
    /// `r`, `o` or `f`.
    Render(RenderMode),
}

impl Command {
    /// Parse one line. Keywords ignore case; patterns keep theirs.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(Command::Nothing);
        }

        let keyword = match text.to_ascii_lowercase().as_str() {
            "-" => Some(Command::Cancel),
            "*" => Some(Command::Recompute),
            "." => Some(Command::Expand),
            "<" => Some(Command::First),
            ">" => Some(Command::Last),
            "^" => Some(Command::Skip),
            "r" => Some(Command::Render(RenderMode::Ids)),
            "o" => Some(Command::Render(RenderMode::Plain)),
            "f" => Some(Command::Render(RenderMode::Full)),
            _ => None,
        };
        if let Some(command) = keyword {
            return Ok(command);
        }

        if let Some(rest) = text.strip_prefix('+') {
            return Ok(Command::NewNode {
                rule: number(rest)?,
            });
        }
        if let Some(rest) = text.strip_prefix('~') {
            return Ok(Command::Unlink { node: number(rest)? });
        }
        if let Some(rest) = text.strip_prefix('=') {
            return Ok(Command::Focus { node: number(rest)? });
        }
        if let Some(rest) = text.strip_prefix('-') {
            return Ok(Command::Delete { node: number(rest)? });
        }
        if let Some(rest) = text.strip_prefix('/') {
            return Ok(Command::Path {
                node: None,
                pattern: pattern(rest)?,
            });
        }
        if let Some(rest) = text.strip_prefix('?') {
            return Ok(Command::Quick {
                pattern: pattern(rest)?,
            });
        }

        if let Some((head, rest)) = text.split_once(char::is_whitespace)
            && head.eq_ignore_ascii_case("s")
        {
            let rest = rest.trim_start();
            let (node, pat) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            return Ok(Command::Path {
                node: Some(number(node)?),
                pattern: pattern(pat)?,
            });
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        match parts[..] {
            [n] => n
                .parse()
                .map(Command::Index)
                .map_err(|_| CommandError::Unknown(text.to_owned())),
            [parent, child] | [parent, "--" | "->", child] => Ok(Command::Link {
                parent: number(parent)?,
                child: number(child)?,
            }),
            _ => Err(CommandError::Unknown(text.to_owned())),
        }
    }
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, CommandError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_owned()))
}

fn pattern(text: &str) -> Result<String, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::MissingPattern);
    }
    Ok(text.to_owned())
}

use std::fs;
use std::path::PathBuf;

use prodgraph_core::{Colors, Session};

use super::grammar_loader::{is_stdin, load_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Dot,
    Tree,
}

pub struct RunArgs {
    pub grammar_path: PathBuf,
    pub script_path: Option<PathBuf>,
    pub exec: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
}

/// A command that failed, with its 1-based position in the command stream.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    pub source: prodgraph_core::Error,
}

pub fn run(args: RunArgs) {
    if is_stdin(&args.grammar_path) && args.script_path.as_deref().is_some_and(is_stdin) {
        eprintln!("error: grammar and script cannot both be read from stdin");
        std::process::exit(1);
    }

    let grammar = load_or_exit(&args.grammar_path);
    let script = args
        .script_path
        .as_ref()
        .map(|path| load_or_exit(path))
        .unwrap_or_default();

    let mut session = Session::new(grammar);
    let lines = script.lines().chain(args.exec.iter().map(String::as_str));
    if let Err(e) = execute_script(&mut session, lines) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let output = render(&session, args.format, Colors::new(args.color));
    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

/// Run each line in order, stopping at the first failure.
pub fn execute_script<'a>(
    session: &mut Session,
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<(), ScriptError> {
    for (i, line) in lines.into_iter().enumerate() {
        session
            .run(line)
            .map_err(|source| ScriptError { line: i + 1, source })?;
    }
    Ok(())
}

pub fn render(session: &Session, format: OutputFormat, colors: Colors) -> String {
    match format {
        OutputFormat::Dot => session.dot(),
        OutputFormat::Tree => session.tree(colors),
    }
}

fn load_or_exit(path: &std::path::Path) -> String {
    match load_text(path) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

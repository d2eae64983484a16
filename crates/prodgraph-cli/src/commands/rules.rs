use std::fmt::Write;
use std::path::PathBuf;

use prodgraph_core::grammar::SEPARATOR;
use prodgraph_core::{Colors, Error, RuleBlock, parse_blocks};

use super::grammar_loader::load_text;

pub struct RulesArgs {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: RulesArgs) {
    let text = match load_text(&args.grammar_path) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let blocks = parse_blocks(&text);
    print!("{}", render_listing(&blocks, Colors::new(args.color)));

    let problems = malformed(&blocks);
    for problem in &problems {
        eprintln!("warning: {}", problem);
    }
    if args.strict && !problems.is_empty() {
        std::process::exit(1);
    }
}

/// Valid rules numbered from 1, each with the line it starts on.
pub fn render_listing(blocks: &[RuleBlock], colors: Colors) -> String {
    let mut out = String::new();
    let rules = blocks.iter().filter_map(|block| block.rule.as_ref());
    for (i, rule) in rules.enumerate() {
        let shown = rule.to_string();
        let body = shown
            .split_once(SEPARATOR)
            .map(|(_, rest)| rest.trim_start())
            .unwrap_or_default();
        let line = rule.line().unwrap_or_default();
        writeln!(
            out,
            "{}{:>3}{} {}{}{} {} {}  {}(line {}){}",
            colors.dim,
            i + 1,
            colors.reset,
            colors.nonterminal,
            rule.full_name(),
            colors.reset,
            SEPARATOR,
            body,
            colors.dim,
            line,
            colors.reset,
        )
        .expect("String write never fails");
    }
    out
}

pub fn malformed(blocks: &[RuleBlock]) -> Vec<Error> {
    blocks
        .iter()
        .filter(|block| block.is_malformed())
        .map(|block| Error::MalformedRule { line: block.line })
        .collect()
}

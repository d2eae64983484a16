//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::rules::RulesArgs;
use crate::commands::run::{OutputFormat, RunArgs};

pub struct RulesParams {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl RulesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<RulesParams> for RulesArgs {
    fn from(p: RulesParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RunParams {
    pub grammar_path: PathBuf,
    pub script_path: Option<PathBuf>,
    pub exec: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            script_path: m.get_one::<PathBuf>("script_path").cloned(),
            exec: m
                .get_many::<String>("exec")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        // Colors never go into files.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            grammar_path: p.grammar_path,
            script_path: p.script_path,
            exec: p.exec,
            format: p.format,
            output: p.output,
            color,
        }
    }
}

/// Required by the command definition, so absent only in hand-built matches.
fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("tree") => OutputFormat::Tree,
        _ => OutputFormat::Dot,
    }
}

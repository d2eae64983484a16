//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("prodgraph")
        .about("Build derivation trees from production rules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(rules_command())
        .subcommand(run_command())
}

/// List the rules of a grammar file.
pub fn rules_command() -> Command {
    Command::new("rules")
        .about("List the valid rules of a grammar, numbered")
        .after_help(
            r#"EXAMPLES:
  prodgraph rules grammar.txt          # numbered rules, warnings on stderr
  prodgraph rules grammar.txt --strict # fail on malformed rules"#,
        )
        .arg(grammar_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Run editing commands against a fresh session.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Run editing commands and print the resulting derivation graph")
        .override_usage(
            "\
  prodgraph run <GRAMMAR> [SCRIPT]
  prodgraph run <GRAMMAR> -e <CMD>...",
        )
        .after_help(
            r#"EXAMPLES:
  prodgraph run grammar.txt script.txt | dot -Tpng > tree.png
  prodgraph run grammar.txt -e +1 -e . -e '<' --format tree
  prodgraph run grammar.txt - < script.txt -o tree.dot

COMMANDS:
  +R          new root for rule number R
  N           select node N, or choose alternative N while selecting
  . < >       select focused node / choose first / choose last
  ?PAT        quick-choose the alternative matching PAT
  s N PAT     simple path from node N to PAT (/PAT starts at the focus)
  P C         link C under P (also P -- C, P -> C)
  ~N -N =N    unlink / delete / focus node N
  * ^ -       recompute focus queue / skip focus / cancel selection
  r o f       render with ids / plain / all ids"#,
        )
        .arg(grammar_path_arg())
        .arg(script_path_arg())
        .arg(exec_arg())
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

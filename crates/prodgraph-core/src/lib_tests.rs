use indoc::indoc;

use crate::{
    DerivationGraph, Error, RuleIndex, Session, expand, merge_by_name, parse_blocks, parse_rules,
    simple_path,
};

#[test]
fn select_only_alternative() {
    let rules = parse_rules("<S> ::= <A> b\n\n<A> ::= a");
    assert_eq!(rules.iter().flatten().count(), 2);

    let mut graph = DerivationGraph::new();
    let root = graph.new_node("<S>");
    let rule = merge_by_name(&rules, "<S>").unwrap();
    let [only] = rule.alternatives() else {
        panic!("expected one alternative");
    };

    let created = expand(&mut graph, only, root).unwrap();

    assert_eq!(created, [root + 1, root + 2]);
    assert_eq!(graph.label(root + 1), Some("<A>"));
    assert_eq!(graph.label(root + 2), Some("b"));
    assert!(graph.incomplete().contains(&(root + 1)));
    assert!(!graph.incomplete().contains(&root));
}

#[test]
fn build_a_whole_derivation() {
    let grammar = indoc! {r#"
        <expr> ::= <term> | <expr> + <term>

        <term> ::= <num>
        <num> ::= 1 | 2
    "#};
    let mut session = Session::new(grammar);

    for line in ["+1", "0", ">", ".", "<", "/1", "/2"] {
        session.run(line).unwrap();
    }

    insta::assert_snapshot!(session.tree(crate::Colors::OFF), @r"
    0 <expr>
      1 <expr>
        4 <term>
          5 <num>
            6 1
      2 +
      3 <term>
        7 <num>
          8 2
    ");
    assert!(session.graph().incomplete().is_empty());
}

#[test]
fn index_rebuilds_from_text() {
    let mut graph = DerivationGraph::new();
    let root = graph.new_node("<a>");

    let before = RuleIndex::build(&parse_rules("<a> ::= <b>"));
    let after = RuleIndex::build(&parse_rules("<a> ::= <b>\n<b> ::= q"));

    assert!(simple_path(&mut graph, &before, root, "q").is_err());
    assert!(simple_path(&mut graph, &after, root, "q").is_ok());
}

#[test]
fn strict_callers_report_malformed_blocks() {
    let text = "<a> ::= b\n\nnot a rule ::=\n<c> ::= d";

    let errors: Vec<Error> = parse_blocks(text)
        .iter()
        .filter(|b| b.is_malformed())
        .map(|b| Error::MalformedRule { line: b.line })
        .collect();

    assert_eq!(errors, [Error::MalformedRule { line: 3 }]);
    insta::assert_snapshot!(errors[0], @"malformed rule at line 3");
}

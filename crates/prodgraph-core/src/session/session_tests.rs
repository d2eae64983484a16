use indoc::indoc;

use super::*;
use crate::Error;

const GRAMMAR: &str = indoc! {"
    <S> ::= <A> b

    <A> ::= a | <B> c

    <B> ::= x
"};

fn session(lines: &[&str]) -> Session {
    let mut session = Session::new(GRAMMAR);
    for line in lines {
        session.run(line).unwrap();
    }
    session
}

fn queue(session: &Session) -> Vec<NodeId> {
    session.relevant().collect()
}

fn label(session: &Session, id: NodeId) -> Option<&str> {
    session.graph().label(id)
}

#[test]
fn new_node_is_queued() {
    let s = session(&["+1", "+3"]);

    assert_eq!(label(&s, 0), Some("<S>"));
    assert_eq!(label(&s, 1), Some("<B>"));
    assert_eq!(queue(&s), [0, 1]);
    assert_eq!(s.focused(), Some(0));
}

#[test]
fn invalid_rule_number() {
    let mut s = session(&[]);

    assert_eq!(
        s.execute(&Command::NewNode { rule: 4 }),
        Err(SessionError::InvalidRuleNumber(4))
    );
    assert_eq!(
        s.execute(&Command::NewNode { rule: 0 }),
        Err(SessionError::InvalidRuleNumber(0))
    );
}

#[test]
fn expand_focused_node() {
    let s = session(&["+1", ".", "<"]);

    assert_eq!(*s.mode(), Mode::Idle);
    assert_eq!(label(&s, 1), Some("<A>"));
    assert_eq!(label(&s, 2), Some("b"));
    assert_eq!(queue(&s), [1]);
}

#[test]
fn selection_mode() {
    let mut s = session(&["+2", "0"]);

    let Mode::Selecting { node, rule } = s.mode() else {
        panic!("expected selection, got {:?}", s.mode());
    };
    assert_eq!(*node, 0);
    assert_eq!(rule.alternatives(), ["a", "<B> c"]);

    assert_eq!(s.run("+1"), Err(Error::Session(SessionError::Selecting)));
    assert_eq!(s.run("5"), Err(Error::Session(SessionError::InvalidChoice(5))));
    assert!(matches!(s.mode(), Mode::Selecting { .. }));

    s.run(">").unwrap();
    assert_eq!(queue(&s), [1]);
    assert_eq!(label(&s, 1), Some("<B>"));
    assert_eq!(label(&s, 2), Some("c"));
}

#[test]
fn quick_select_needs_one_match() {
    let mut s = session(&["+2", "0"]);

    assert_eq!(
        s.run("?z"),
        Err(Error::Session(SessionError::NoQuickMatch {
            pattern: "z".into(),
            matches: 0,
        }))
    );
    assert_eq!(
        s.run("?''"),
        Err(Error::Session(SessionError::NoQuickMatch {
            pattern: "''".into(),
            matches: 2,
        }))
    );

    s.run("?a").unwrap();
    assert_eq!(label(&s, 1), Some("a"));
    assert!(s.relevant().next().is_none());
}

#[test]
fn cancel_leaves_graph_alone() {
    let mut s = session(&["+1", "0", "-"]);

    assert_eq!(*s.mode(), Mode::Idle);
    assert_eq!(s.graph().len(), 1);
    assert_eq!(s.run("<"), Err(Error::Session(SessionError::NotSelecting)));
}

#[test]
fn select_without_rule() {
    let mut s = session(&["+1", ".", "<"]);

    assert_eq!(s.run("2"), Err(Error::Session(SessionError::NoRule { node: 2 })));
    assert_eq!(s.run("9"), Err(Error::Session(SessionError::UnknownNode(9))));
}

#[test]
fn paths_from_focused_and_explicit_nodes() {
    let s = session(&["+1", ".", "<", "/'c'", "s 3 x"]);

    assert_eq!(label(&s, 3), Some("<B>"));
    assert_eq!(label(&s, 4), Some("c"));
    assert_eq!(label(&s, 5), Some("x"));
    assert_eq!(s.graph().parent(5), Some(3));
    assert!(s.graph().incomplete().is_empty());
    assert!(queue(&s).is_empty());
}

#[test]
fn path_queues_expanded_nonterminals_only() {
    let s = session(&["+1", "/'c'"]);

    assert_eq!(label(&s, 1), Some("<A>"));
    assert_eq!(label(&s, 2), Some("<B>"));
    assert_eq!(label(&s, 3), Some("c"));
    assert_eq!(queue(&s), [2]);
}

#[test]
fn failed_path_changes_nothing() {
    let mut s = session(&["+1"]);

    let err = s.run("/q").unwrap_err();

    assert!(matches!(
        err,
        Error::Session(SessionError::Resolve(
            ResolveError::AmbiguousOrMissingSeed { matches: 0, .. }
        ))
    ));
    assert_eq!(s.graph().len(), 1);
    assert_eq!(queue(&s), [0]);
}

#[test]
fn delete_requeues_parent() {
    let mut s = session(&["+1", ".", "<", "+3"]);
    assert_eq!(queue(&s), [1, 3]);

    s.run("-1").unwrap();

    assert!(!s.graph().contains(1));
    assert_eq!(queue(&s), [3, 0]);
    assert_eq!(
        s.run("-1"),
        Err(Error::Session(SessionError::Graph(GraphError::UnknownNode(1))))
    );
}

#[test]
fn unlink_and_link() {
    let mut s = session(&["+1", ".", "<"]);

    s.run("~2").unwrap();
    assert_eq!(queue(&s), [1, 0]);
    assert_eq!(s.graph().parent(2), None);

    s.run("0 -> 2").unwrap();
    assert_eq!(queue(&s), [1]);
    assert_eq!(s.graph().parent(2), Some(0));

    assert!(matches!(
        s.run("2 0"),
        Err(Error::Session(SessionError::Graph(GraphError::Cycle { .. })))
    ));
}

#[test]
fn focus_skip_recompute() {
    let mut s = session(&["+1", "+2", "+3"]);

    s.run("=2").unwrap();
    assert_eq!(queue(&s), [2, 0, 1]);

    s.run("^").unwrap();
    s.run("^").unwrap();
    assert_eq!(queue(&s), [1]);

    s.run("*").unwrap();
    assert_eq!(queue(&s), [0, 1, 2]);
}

#[test]
fn dot_follows_render_mode() {
    let mut s = session(&["+1", ".", "<"]);

    insta::assert_snapshot!(s.dot(), @r#"
    graph G {
    0 [label="0: <S>" shape=plain]
    1 [label="1: <A>" shape=box]
    2 [label="b" shape=plain]
    0 -- 1
    0 -- 2
    }
    "#);

    s.run("f").unwrap();
    assert!(s.dot().contains(r#"2 [label="2: b" shape=plain]"#));

    s.run("o").unwrap();
    assert!(s.dot().contains(r#"1 [label="<A>" shape=plain]"#));
    assert_eq!(s.tree(Colors::OFF), "<S>\n  <A>\n  b\n");
}

#[test]
fn grammar_edits_apply_to_later_commands() {
    let mut s = session(&["+1"]);

    s.set_grammar("<S> ::= z");
    s.run(".").unwrap();
    s.run("<").unwrap();

    assert_eq!(label(&s, 1), Some("z"));
    assert_eq!(s.grammar(), "<S> ::= z");
}

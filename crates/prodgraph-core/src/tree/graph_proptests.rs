//! Property tests for graph mutation invariants.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use super::*;
use crate::utils::is_nonterminal;

#[derive(Debug, Clone)]
enum Op {
    New(bool),
    Link(u8, u8),
    Unlink(u8),
    Delete(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => any::<bool>().prop_map(Op::New),
        3 => (any::<u8>(), any::<u8>()).prop_map(|(p, c)| Op::Link(p, c)),
        1 => any::<u8>().prop_map(Op::Unlink),
        1 => any::<u8>().prop_map(Op::Delete),
    ]
}

/// Map an arbitrary byte onto an ID that has been handed out, if any.
fn pick(g: &DerivationGraph, n: u8) -> Option<NodeId> {
    let next = g.next_id();
    (next > 0).then(|| NodeId::from(n) % next)
}

fn apply(g: &mut DerivationGraph, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::New(nonterminal) => {
                let label = if nonterminal { "<n>" } else { "t" };
                g.new_node(label);
            }
            Op::Link(p, c) => {
                if let (Some(p), Some(c)) = (pick(g, p), pick(g, c)) {
                    let _ = g.add_link(p, c);
                }
            }
            Op::Unlink(c) => {
                if let Some(c) = pick(g, c) {
                    g.unlink(c);
                }
            }
            Op::Delete(n) => {
                if let Some(n) = pick(g, n) {
                    let _ = g.delete(n);
                }
            }
        }
    }
}

fn descendants(g: &DerivationGraph, root: NodeId) -> BTreeSet<NodeId> {
    let mut out = BTreeSet::from([root]);
    let mut pending = vec![root];
    while let Some(n) = pending.pop() {
        for child in g.children(n) {
            if out.insert(child) {
                pending.push(child);
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn delete_removes_exactly_the_subtree(ops in prop::collection::vec(op(), 1..60), victim in any::<u8>()) {
        let mut g = DerivationGraph::new();
        apply(&mut g, &ops);
        prop_assume!(!g.is_empty());

        let live: Vec<NodeId> = g.iter().map(|(id, _)| id).collect();
        let victim = live[victim as usize % live.len()];
        let doomed = descendants(&g, victim);
        let before: BTreeMap<NodeId, String> =
            g.iter().map(|(id, l)| (id, l.to_owned())).collect();

        g.delete(victim).unwrap();

        for (id, label) in &before {
            if doomed.contains(id) {
                prop_assert!(!g.contains(*id));
            } else {
                prop_assert_eq!(g.label(*id), Some(label.as_str()));
            }
        }
        let fresh = g.new_node("fresh");
        prop_assert!(!before.contains_key(&fresh));
    }

    #[test]
    fn incomplete_is_childless_nonterminals(ops in prop::collection::vec(op(), 0..80)) {
        let mut g = DerivationGraph::new();
        apply(&mut g, &ops);

        let expected: BTreeSet<NodeId> = g
            .iter()
            .filter(|&(id, label)| is_nonterminal(label) && !g.has_children(id))
            .map(|(id, _)| id)
            .collect();

        prop_assert_eq!(g.incomplete(), expected);
    }

    #[test]
    fn links_only_join_live_nodes(ops in prop::collection::vec(op(), 0..80)) {
        let mut g = DerivationGraph::new();
        apply(&mut g, &ops);

        for (parent, child) in g.links() {
            prop_assert!(g.contains(parent));
            prop_assert!(g.contains(child));
        }
        for (id, _) in g.iter() {
            let mut seen = BTreeSet::new();
            let mut cur = Some(id);
            while let Some(n) = cur {
                prop_assert!(seen.insert(n), "cycle through {}", n);
                cur = g.parent(n);
            }
        }
    }
}

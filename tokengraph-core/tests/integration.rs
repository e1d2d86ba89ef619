//! Integration Tests for the Dependency Graph
//!
//! These tests drive the public API through whole declaration sequences.

use tokengraph_core::{CyclicDependencyError, DeclarationError, DependencyGraph};

fn descendants_of(graph: &DependencyGraph, name: &str) -> Vec<String> {
    let id = graph.get(name).expect("token should be registered");
    graph
        .descendant_names(id)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn build(lines: &[&str]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for line in lines {
        graph.declare_line(line).unwrap();
    }
    graph
}

/// Six declarations with shared and transitive dependencies.
#[test]
fn closure_over_six_declarations() {
    let graph = build(&["A B C", "B C E", "C G", "D A F", "E F", "F H"]);

    assert_eq!(graph.token_count(), 8);
    assert_eq!(descendants_of(&graph, "A"), ["B", "C", "E", "F", "G", "H"]);
    assert_eq!(descendants_of(&graph, "B"), ["C", "E", "F", "G", "H"]);
    assert_eq!(descendants_of(&graph, "C"), ["G"]);
    assert_eq!(descendants_of(&graph, "D"), ["A", "B", "C", "E", "F", "G", "H"]);
    assert_eq!(descendants_of(&graph, "E"), ["F", "H"]);
    assert_eq!(descendants_of(&graph, "F"), ["H"]);
    assert!(descendants_of(&graph, "G").is_empty());
    assert!(descendants_of(&graph, "H").is_empty());
    assert!(graph.is_acyclic());
}

/// The report renders the same closure, one sorted line per token.
#[test]
fn report_lines_are_sorted_by_name() {
    let graph = build(&["F H", "E F", "D A F", "C G", "B C E", "A B C"]);

    let expected = [
        "A B C E F G H",
        "B C E F G H",
        "C G",
        "D A B C E F G H",
        "E F H",
        "F H",
        "G ",
        "H ",
    ]
    .map(|line| format!("{line}\n"))
    .concat();
    assert_eq!(graph.report().to_string(), expected);
}

/// `A B` then `B A`: the second declaration is rejected and leaves no edge.
#[test]
fn two_token_cycle_is_rejected() {
    let mut graph = DependencyGraph::new();
    graph.declare_dependencies("A", ["B"]).unwrap();

    let result = graph.declare_dependencies("B", ["A"]);
    assert_eq!(
        result,
        Err(CyclicDependencyError {
            parent: "B".to_string(),
            child: "A".to_string(),
        })
    );

    let a = graph.get("A").unwrap();
    let b = graph.get("B").unwrap();
    assert_eq!(graph.children(a), ["B"]);
    assert!(graph.children(b).is_empty());
    assert_eq!(descendants_of(&graph, "A"), ["B"]);
    assert!(descendants_of(&graph, "B").is_empty());
}

/// Children are processed left to right and earlier edges are kept.
#[test]
fn failed_declaration_keeps_earlier_edges() {
    let mut graph = build(&["A B", "B D"]);

    let err = graph.declare_dependencies("D", ["F", "A", "G"]).unwrap_err();
    assert_eq!(err.child, "A");

    let d = graph.get("D").unwrap();
    assert_eq!(graph.children(d), ["F"]);
    // Never reached, so never registered.
    assert!(graph.get("G").is_none());
    assert!(graph.is_acyclic());
}

/// A rejected first child stops the call before later children.
#[test]
fn failed_first_child_skips_the_rest() {
    let mut graph = build(&["A B", "B D"]);

    assert!(graph.declare_dependencies("D", ["A", "F"]).is_err());

    let d = graph.get("D").unwrap();
    assert!(graph.children(d).is_empty());
    assert!(graph.get("F").is_none());
}

/// Self-dependency fails whether or not the token already exists.
#[test]
fn self_dependency_is_rejected() {
    let mut graph = DependencyGraph::new();
    assert!(matches!(
        graph.declare_line("X X"),
        Err(DeclarationError::Cyclic(_))
    ));

    graph.declare_line("Y Z").unwrap();
    assert!(graph.declare_dependencies("Y", ["Y"]).is_err());
    assert!(graph.is_acyclic());
}

/// Independent graphs do not see each other's tokens.
#[test]
fn graphs_are_isolated() {
    let first = build(&["A B"]);
    let mut second = DependencyGraph::new();

    second.declare_dependencies("B", ["A"]).unwrap();

    assert_eq!(descendants_of(&first, "A"), ["B"]);
    assert_eq!(descendants_of(&second, "B"), ["A"]);
}

/// Random declaration sequences never produce a token that reaches itself.
#[test]
fn acyclicity_holds_across_many_declarations() {
    let mut graph = DependencyGraph::new();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut accepted = 0;

    for _ in 0..300 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let parent = format!("t{}", seed % 25);
        let child = format!("t{}", (seed >> 16) % 25);

        if graph.declare_dependencies(&parent, [&child]).is_ok() {
            accepted += 1;
        }
    }

    assert!(accepted > 0);
    assert!(graph.is_acyclic());
    for (id, token) in graph.registry().iter() {
        assert!(!graph.descendants(id).contains(&id), "{} reaches itself", token.name());
    }
}

//! End-to-end checks across the pipeline: every compiled program, rendered
//! in the solver's text protocol and parsed back, is the tree it was
//! compiled from.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use numbers_bytecode::{binomial, compile, disassemble};
use numbers_solution::{parse_line, ResultNode, SolutionSet};
use numbers_tree::{OperatorKind, Topologies, ValuedTree};
use pretty_assertions::assert_eq;

const CARDS: [i64; 5] = [25, 50, 75, 100, 3];

/// The solution a non-inverting solver reports for `tree`.
fn solution_for(tree: &ValuedTree, values: &[i64]) -> ResultNode {
    match tree {
        ValuedTree::Slot(slot) => ResultNode::Value(values[*slot]),
        ValuedTree::Chain { kind, children } => {
            let symbol = match kind {
                OperatorKind::AddChain => '+',
                OperatorKind::MultiplyChain => '*',
            };
            let tags = symbol.to_string().repeat(children.len());
            let children = children
                .iter()
                .map(|child| solution_for(child, values))
                .collect();
            ResultNode::op(children, &tags).unwrap()
        }
    }
}

/// Trees in stream order: `k`, then shape, then subset.
fn trees_in_stream_order(n_cards: usize) -> Vec<ValuedTree> {
    let topologies = Topologies::up_to(n_cards);
    let mut trees = Vec::new();
    for (n_leaves, shapes) in topologies.iter() {
        for shape in shapes {
            let annotated = shape.annotate(OperatorKind::AddChain);
            for subset in numbers_bytecode::Combinations::new(n_cards, n_leaves) {
                trees.push(annotated.with_slots(&subset));
            }
        }
    }
    trees
}

#[test]
fn programs_parse_back_to_their_trees() {
    for n_cards in 1..=CARDS.len() {
        let compiled = compile(n_cards).unwrap();
        let programs = disassemble(compiled.bytes()).unwrap();
        let trees = trees_in_stream_order(n_cards);
        assert_eq!(programs.len(), trees.len(), "N = {n_cards}");

        for (index, (program, tree)) in programs.iter().zip(&trees).enumerate() {
            let tokens = program.to_solver_tokens(&CARDS).unwrap();
            let parsed = parse_line(&tokens).unwrap();
            assert_eq!(
                parsed,
                solution_for(tree, &CARDS),
                "N = {n_cards}, program {index}: {tokens}"
            );
        }
    }
}

#[test]
fn operands_are_each_card_at_most_once() {
    let compiled = compile(4).unwrap();
    for program in disassemble(compiled.bytes()).unwrap() {
        let mut values = parse_line(&program.to_solver_tokens(&CARDS).unwrap())
            .unwrap()
            .values();
        let n = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), n, "{program}");
        assert_eq!(program.n_operands(), n);
    }
}

#[test]
fn compiled_programs_are_distinct_up_to_regrouping() {
    // 4·1 + 6·1 + 4·4 + 1·26
    let compiled = compile(4).unwrap();
    assert_eq!(compiled.n_programs(), 52);

    let solutions: Vec<ResultNode> = disassemble(compiled.bytes())
        .unwrap()
        .iter()
        .map(|program| parse_line(&program.to_solver_tokens(&CARDS).unwrap()).unwrap())
        .collect();
    let set = SolutionSet::from_nodes(&solutions);
    assert_eq!(set.total(), 52);
    assert_eq!(set.len(), 52);
    assert!(set.duplicates().is_empty());
}

#[test]
fn every_card_subset_size_is_covered() {
    let n_cards = 5;
    let compiled = compile(n_cards).unwrap();
    let programs = disassemble(compiled.bytes()).unwrap();
    let topologies = Topologies::up_to(n_cards);
    for (n_leaves, shapes) in topologies.iter() {
        let with_k = programs
            .iter()
            .filter(|program| program.n_operands() == n_leaves)
            .count();
        assert_eq!(with_k, shapes.len() * binomial(n_cards, n_leaves), "k = {n_leaves}");
    }
}

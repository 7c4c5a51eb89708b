use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::{all_trees, Topologies};
use crate::TreeShape;

// Counts of distinct labelled dendrograms, after Murtagh, "Counting
// dendrograms: a survey", Discrete Applied Mathematics 7 (1984) 191-199.
const EXPECTED_COUNTS: [usize; 7] = [1, 1, 4, 26, 236, 2752, 39208];

#[test]
fn counts_match_known_sequence() {
    let topologies = Topologies::up_to(7);
    let counts: Vec<usize> = topologies.iter().map(|(_, shapes)| shapes.len()).collect();
    assert_eq!(counts, EXPECTED_COUNTS);
}

#[test]
fn shapes_are_pairwise_distinct() {
    let topologies = Topologies::up_to(6);
    for (n_leaves, shapes) in topologies.iter() {
        let distinct: FxHashSet<&TreeShape> = shapes.iter().collect();
        assert_eq!(distinct.len(), shapes.len(), "duplicates at {n_leaves} leaves");
    }
}

#[test]
fn every_shape_has_requested_leaf_count() {
    for shape in all_trees(5) {
        assert_eq!(shape.leaf_count(), 5, "{shape}");
    }
}

#[test]
fn zero_leaves_yields_nothing() {
    assert!(all_trees(0).is_empty());
    assert!(Topologies::up_to(0).with_leaves(0).is_empty());
}

#[test]
fn three_leaf_order_is_fixed() {
    let got: Vec<String> = all_trees(3).iter().map(ToString::to_string).collect();
    assert_eq!(
        got,
        vec![
            "(? (? 0 1) 2)",
            "(? 0 1 2)",
            "(? (? 0 2) 1)",
            "(? 0 (? 1 2))",
        ]
    );
}

#[test]
fn with_leaves_matches_all_trees() {
    let topologies = Topologies::up_to(4);
    assert_eq!(topologies.max_leaves(), 4);
    assert_eq!(topologies.with_leaves(4), all_trees(4).as_slice());
    assert!(topologies.with_leaves(5).is_empty());
}

#[test]
fn enumeration_is_reproducible() {
    assert_eq!(all_trees(5), all_trees(5));
}

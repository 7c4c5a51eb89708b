use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::{GroupKind, OpNode, ResultNode, ShapeError, Tag};

fn v(value: i64) -> ResultNode {
    ResultNode::Value(value)
}

// === Tags ===

#[test]
fn tag_groups() {
    assert_eq!(Tag::Add.group(), GroupKind::Additive);
    assert_eq!(Tag::Subtract.group(), GroupKind::Additive);
    assert_eq!(Tag::Multiply.group(), GroupKind::Multiplicative);
    assert_eq!(Tag::Divide.group(), GroupKind::Multiplicative);
}

#[test]
fn inversion_stays_in_group() {
    assert_eq!(Tag::Add.inverted(), Tag::Subtract);
    assert_eq!(Tag::Subtract.inverted(), Tag::Add);
    assert_eq!(Tag::Multiply.inverted(), Tag::Divide);
    assert_eq!(Tag::Divide.inverted(), Tag::Multiply);
}

#[test]
fn forward_sorts_before_inverse() {
    assert!(Tag::Add < Tag::Subtract);
    assert!(Tag::Multiply < Tag::Divide);
}

#[test]
fn symbols_round_trip() {
    for tag in [Tag::Add, Tag::Subtract, Tag::Multiply, Tag::Divide] {
        assert_eq!(Tag::from_symbol(tag.symbol()), Some(tag));
    }
    assert_eq!(Tag::from_symbol('x'), None);
}

#[test]
fn group_symbols() {
    assert_eq!(GroupKind::Additive.forward_symbol(), '+');
    assert_eq!(GroupKind::Additive.inverse_symbol(), '−');
    assert_eq!(GroupKind::Multiplicative.forward_symbol(), '×');
    assert_eq!(GroupKind::Multiplicative.inverse_symbol(), '÷');
}

// === Construction ===

#[test]
fn op_node_from_symbols() {
    let node = OpNode::from_symbols(vec![v(24), v(13)], "+-").unwrap();
    assert_eq!(node.group(), GroupKind::Additive);
    assert_eq!(node.tags(), &[Tag::Add, Tag::Subtract]);
    assert_eq!(node.tag_string(), "+-");
    assert_eq!(node.children(), &[v(24), v(13)]);
}

#[test]
fn group_is_fixed_by_first_tag() {
    let node = OpNode::from_symbols(vec![v(99), v(11)], "/*").unwrap();
    assert_eq!(node.group(), GroupKind::Multiplicative);
}

#[test]
fn empty_node_is_rejected() {
    assert_eq!(OpNode::new(vec![], smallvec![]), Err(ShapeError::Empty));
}

#[test]
fn count_mismatch_is_rejected() {
    assert_eq!(
        OpNode::from_symbols(vec![v(1), v(2)], "+"),
        Err(ShapeError::CountMismatch {
            children: 2,
            tags: 1
        })
    );
}

#[test]
fn mixed_groups_are_rejected() {
    let err = OpNode::from_symbols(vec![v(1), v(2)], "+*").unwrap_err();
    assert_eq!(err.to_string(), "operator tags `+*` mix additive and multiplicative operators");
}

#[test]
fn unknown_symbol_is_rejected() {
    assert_eq!(
        ResultNode::op(vec![v(1), v(2)], "+?"),
        Err(ShapeError::UnknownSymbol('?'))
    );
}

#[test]
fn values_in_leaf_order() {
    let inner = ResultNode::op(vec![v(24), v(13)], "+-").unwrap();
    let node = ResultNode::op(vec![inner, v(99)], "/*").unwrap();
    assert_eq!(node.values(), vec![24, 13, 99]);
    assert_eq!(node.leaf_count(), 3);
}

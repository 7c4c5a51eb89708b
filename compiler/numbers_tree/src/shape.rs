//! Unordered n-ary tree topologies.

use std::fmt;

use crate::annotated::{AnnotatedTree, OperatorKind};

/// Branching structure of an expression, independent of operators and cards.
///
/// Leaves are labelled `0..k` in the order they were introduced during
/// enumeration. Internal nodes always have at least two children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TreeShape {
    Leaf(usize),
    Internal(Vec<TreeShape>),
}

impl TreeShape {
    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeShape::Leaf(_) => 1,
            TreeShape::Internal(children) => children.iter().map(TreeShape::leaf_count).sum(),
        }
    }

    /// Every way of introducing `new_leaf` into this shape, in generation order.
    ///
    /// Three kinds of extension are produced, in this order:
    ///
    /// 1. the whole shape paired with the new leaf under a fresh binary root;
    /// 2. if the root is internal, the new leaf appended as an extra child;
    /// 3. for each child position in turn, every extension of that child with
    ///    its siblings held fixed.
    ///
    /// Applied to every shape with `k - 1` leaves this yields each shape with
    /// `k` leaves exactly once. The order is part of the contract: compiled
    /// program streams and their fixtures depend on it.
    pub fn extensions(&self, new_leaf: usize) -> Vec<TreeShape> {
        let mut out = Vec::new();
        self.push_extensions(new_leaf, &mut out);
        out
    }

    fn push_extensions(&self, new_leaf: usize, out: &mut Vec<TreeShape>) {
        out.push(TreeShape::Internal(vec![
            self.clone(),
            TreeShape::Leaf(new_leaf),
        ]));

        let TreeShape::Internal(children) = self else {
            return;
        };

        let mut widened = children.clone();
        widened.push(TreeShape::Leaf(new_leaf));
        out.push(TreeShape::Internal(widened));

        for (position, child) in children.iter().enumerate() {
            for extended in child.extensions(new_leaf) {
                let mut replaced = children.clone();
                replaced[position] = extended;
                out.push(TreeShape::Internal(replaced));
            }
        }
    }

    /// Assign operator kinds: `root` at the top, alternating on the way down.
    pub fn annotate(&self, root: OperatorKind) -> AnnotatedTree {
        match self {
            TreeShape::Leaf(label) => AnnotatedTree::Leaf(*label),
            TreeShape::Internal(children) => AnnotatedTree::Chain {
                kind: root,
                children: children
                    .iter()
                    .map(|child| child.annotate(root.other()))
                    .collect(),
            },
        }
    }
}

/// S-expression form with `?` standing for the not-yet-chosen operator,
/// e.g. `(? 10 (? 5 3))`.
impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeShape::Leaf(label) => write!(f, "{label}"),
            TreeShape::Internal(children) => {
                f.write_str("(?")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

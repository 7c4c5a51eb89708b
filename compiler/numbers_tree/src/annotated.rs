//! Operator-annotated and slot-valued trees.

use std::fmt;

/// How an internal node combines its children.
///
/// A node's kind always differs from its parent's, so chains of the same
/// operator are never nested and every expression has one annotated form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    AddChain,
    MultiplyChain,
}

impl OperatorKind {
    /// The kind used for this node's children.
    #[inline]
    pub const fn other(self) -> OperatorKind {
        match self {
            OperatorKind::AddChain => OperatorKind::MultiplyChain,
            OperatorKind::MultiplyChain => OperatorKind::AddChain,
        }
    }

    /// Symbol used in S-expression output.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            OperatorKind::AddChain => '+',
            OperatorKind::MultiplyChain => '*',
        }
    }
}

/// A [`TreeShape`](crate::TreeShape) whose internal nodes carry an operator kind.
///
/// Leaves still hold their creation-order label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotatedTree {
    Leaf(usize),
    Chain {
        kind: OperatorKind,
        children: Vec<AnnotatedTree>,
    },
}

impl AnnotatedTree {
    /// Replace each leaf label `i` with `slots[i]`.
    ///
    /// # Panics
    ///
    /// Panics if a leaf label is not a valid index into `slots`. Shapes from
    /// enumeration with `k` leaves use labels `0..k`, so a `k`-element slot
    /// subset always fits.
    pub fn with_slots(&self, slots: &[usize]) -> ValuedTree {
        match self {
            AnnotatedTree::Leaf(label) => ValuedTree::Slot(slots[*label]),
            AnnotatedTree::Chain { kind, children } => ValuedTree::Chain {
                kind: *kind,
                children: children.iter().map(|child| child.with_slots(slots)).collect(),
            },
        }
    }
}

/// An annotated tree whose leaves name concrete operand slots.
///
/// Within one tree no slot appears twice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValuedTree {
    Slot(usize),
    Chain {
        kind: OperatorKind,
        children: Vec<ValuedTree>,
    },
}

impl ValuedTree {
    /// Operand slots in left-to-right leaf order.
    pub fn slots(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_slots(&mut out);
        out
    }

    fn collect_slots(&self, out: &mut Vec<usize>) {
        match self {
            ValuedTree::Slot(slot) => out.push(*slot),
            ValuedTree::Chain { children, .. } => {
                for child in children {
                    child.collect_slots(out);
                }
            }
        }
    }
}

fn write_chain<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    kind: OperatorKind,
    children: &[T],
) -> fmt::Result {
    write!(f, "({}", kind.symbol())?;
    for child in children {
        write!(f, " {child}")?;
    }
    f.write_str(")")
}

impl fmt::Display for AnnotatedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotatedTree::Leaf(label) => write!(f, "{label}"),
            AnnotatedTree::Chain { kind, children } => write_chain(f, *kind, children),
        }
    }
}

impl fmt::Display for ValuedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuedTree::Slot(slot) => write!(f, "{slot}"),
            ValuedTree::Chain { kind, children } => write_chain(f, *kind, children),
        }
    }
}

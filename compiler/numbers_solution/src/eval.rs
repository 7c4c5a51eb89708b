//! Exact integer evaluation of result trees.

use crate::node::{GroupKind, OpNode, ResultNode};

impl ResultNode {
    /// Value of the expression, if it is an exact integer.
    ///
    /// An additive group is the sum of its forward children minus the sum
    /// of its inverted ones; a multiplicative group is the product of its
    /// forward children divided by the product of its inverted ones.
    /// Returns `None` on overflow, division by zero, or a division with a
    /// remainder.
    pub fn evaluate(&self) -> Option<i64> {
        match self {
            ResultNode::Value(value) => Some(*value),
            ResultNode::Op(node) => evaluate_group(node),
        }
    }
}

fn evaluate_group(node: &OpNode) -> Option<i64> {
    let group = node.group();
    let identity = match group {
        GroupKind::Additive => 0i64,
        GroupKind::Multiplicative => 1i64,
    };
    let (mut forward, mut inverted) = (identity, identity);

    for (tag, child) in node.entries() {
        let value = child.evaluate()?;
        let acc = if tag.is_inverted() {
            &mut inverted
        } else {
            &mut forward
        };
        *acc = match group {
            GroupKind::Additive => acc.checked_add(value)?,
            GroupKind::Multiplicative => acc.checked_mul(value)?,
        };
    }

    match group {
        GroupKind::Additive => forward.checked_sub(inverted),
        GroupKind::Multiplicative => {
            if inverted == 0 || forward.checked_rem(inverted)? != 0 {
                return None;
            }
            forward.checked_div(inverted)
        }
    }
}

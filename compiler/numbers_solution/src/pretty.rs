//! Infix rendering of result trees.

use std::fmt;

use crate::node::{OpNode, ResultNode};

/// Parenthesized infix form: forward children joined by `+`/`×`, then
/// inverted children each introduced by `−`/`÷`, e.g. `(99 ÷ (24 − 13))`.
impl fmt::Display for ResultNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultNode::Value(value) => write!(f, "{value}"),
            ResultNode::Op(node) => write!(f, "({node})"),
        }
    }
}

/// The node's contents without the enclosing parentheses.
impl fmt::Display for OpNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.group();
        let forward = self.entries().filter(|(tag, _)| !tag.is_inverted());
        let inverted = self.entries().filter(|(tag, _)| tag.is_inverted());

        let mut empty = true;
        for (_, child) in forward {
            if !empty {
                write!(f, " {} ", group.forward_symbol())?;
            }
            write!(f, "{child}")?;
            empty = false;
        }
        for (_, child) in inverted {
            if empty {
                write!(f, "{} ", group.inverse_symbol())?;
            } else {
                write!(f, " {} ", group.inverse_symbol())?;
            }
            write!(f, "{child}")?;
            empty = false;
        }
        Ok(())
    }
}

impl ResultNode {
    /// Top-level form: as [`Display`](fmt::Display) with exactly the
    /// outermost parentheses removed, e.g. `99 ÷ (24 − 13)`.
    pub fn pretty(&self) -> String {
        match self {
            ResultNode::Value(value) => value.to_string(),
            ResultNode::Op(node) => node.to_string(),
        }
    }
}

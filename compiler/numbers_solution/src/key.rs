//! Totally ordered structural keys.
//!
//! # Order
//!
//! Keys compare first by rank, then structurally:
//!
//! 1. every leaf sorts before every multiplicative group, which sorts
//!    before every additive group;
//! 2. leaves compare by value;
//! 3. groups of the same kind compare their entries lexicographically, a
//!    shorter prefix first;
//! 4. an entry compares its inversion flag first (non-inverted first),
//!    then its child's key, recursively.
//!
//! This is the order of the tuple notation the keys print in, written out
//! so it does not depend on how mixed tuples happen to compare.

use std::cmp::Ordering;
use std::fmt;

use crate::node::{GroupKind, ResultNode};

/// Structural key of a [`ResultNode`].
///
/// Two nodes have equal keys iff they are structurally identical, so keys
/// of canonical nodes identify solutions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Leaf(i64),
    Group {
        kind: GroupKind,
        entries: Vec<KeyEntry>,
    },
}

/// One child of a group key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyEntry {
    pub inverted: bool,
    pub key: Key,
}

impl Key {
    /// Leading element of the tuple notation: 0 leaf, 1 multiplicative, 2 additive.
    pub const fn rank(&self) -> u8 {
        match self {
            Key::Leaf(_) => 0,
            Key::Group {
                kind: GroupKind::Multiplicative,
                ..
            } => 1,
            Key::Group {
                kind: GroupKind::Additive,
                ..
            } => 2,
        }
    }

    /// Tuple notation without the outer parentheses.
    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Leaf(value) => write!(f, "0, {value}"),
            Key::Group { entries, .. } => {
                write!(f, "{}", self.rank())?;
                for entry in entries {
                    write!(f, ", ({}, ", u8::from(entry.inverted))?;
                    entry.key.fmt_inner(f)?;
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Leaf(a), Key::Leaf(b)) => a.cmp(b),
            (Key::Group { entries: a, .. }, Key::Group { entries: b, .. })
                if self.rank() == other.rank() =>
            {
                a.cmp(b)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tuple notation: `(0, 24)` for a leaf,
/// `(2, (0, 0, 24), (1, 0, 13))` for `24 − 13`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.fmt_inner(f)?;
        f.write_str(")")
    }
}

impl ResultNode {
    /// Structural key of this node exactly as it stands.
    ///
    /// Use [`ResultNode::canonical_key`] to identify solutions.
    pub fn key(&self) -> Key {
        match self {
            ResultNode::Value(value) => Key::Leaf(*value),
            ResultNode::Op(node) => Key::Group {
                kind: node.group(),
                entries: node
                    .entries()
                    .map(|(tag, child)| KeyEntry {
                        inverted: tag.is_inverted(),
                        key: child.key(),
                    })
                    .collect(),
            },
        }
    }
}

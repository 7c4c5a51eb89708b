//! Canonical form of result trees.
//!
//! Canonicalization runs two passes, in order:
//!
//! 1. [`flatten`]: a child of the same group kind as its parent is spliced
//!    into the parent. Its tags are inverted on the way in iff the link to
//!    the removed child was inverted, so `a − (b − c)` becomes `a − b + c`.
//!    Children of the other kind are kept whole.
//! 2. [`sort_canonical`]: children are canonicalized first, then the
//!    `(tag, child)` pairs are sorted by tag (forward before inverse) and
//!    child key.
//!
//! Both passes are pure and idempotent.

use crate::key::Key;
use crate::node::{OpNode, ResultNode, Tags};

/// Canonical form: [`flatten`] then [`sort_canonical`].
pub fn canonicalize(node: &ResultNode) -> ResultNode {
    sort_canonical(&flatten(node))
}

/// Splice every same-kind child into its parent, bottom-up.
pub fn flatten(node: &ResultNode) -> ResultNode {
    let ResultNode::Op(op) = node else {
        return node.clone();
    };

    let group = op.group();
    let mut children = Vec::with_capacity(op.children().len());
    let mut tags = Tags::new();

    for (tag, child) in op.entries() {
        match flatten(child) {
            ResultNode::Op(inner) if inner.group() == group => {
                let (inner_children, inner_tags) = inner.into_parts();
                for (inner_tag, grandchild) in inner_tags.into_iter().zip(inner_children) {
                    tags.push(if tag.is_inverted() {
                        inner_tag.inverted()
                    } else {
                        inner_tag
                    });
                    children.push(grandchild);
                }
            }
            flat => {
                tags.push(tag);
                children.push(flat);
            }
        }
    }

    ResultNode::Op(OpNode::from_parts(children, tags))
}

/// Sort every node's `(tag, child)` pairs by `(tag, child key)`, bottom-up.
///
/// Tags of one node share a group, so only `+`/`-` or only `*`/`/` are
/// ever compared.
pub fn sort_canonical(node: &ResultNode) -> ResultNode {
    let ResultNode::Op(op) = node else {
        return node.clone();
    };

    let mut entries: Vec<_> = op
        .entries()
        .map(|(tag, child)| (tag, sort_canonical(child)))
        .collect();
    entries.sort_by_cached_key(|(tag, child)| (*tag, child.key()));

    let (tags, children): (Tags, Vec<ResultNode>) = entries.into_iter().unzip();
    ResultNode::Op(OpNode::from_parts(children, tags))
}

impl ResultNode {
    /// This node in canonical form.
    pub fn canonical(&self) -> ResultNode {
        canonicalize(self)
    }

    /// Key of the canonical form. Equal iff the two results are the same
    /// solution up to reordering and regrouping.
    pub fn canonical_key(&self) -> Key {
        canonicalize(self).key()
    }
}

//! Result trees as reported by the solver engines.

use smallvec::SmallVec;

/// Whether a node combines its children by addition or multiplication.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Multiplicative,
    Additive,
}

impl GroupKind {
    /// Symbol joining non-inverted children in pretty-printed output.
    pub const fn forward_symbol(self) -> char {
        match self {
            GroupKind::Additive => '+',
            GroupKind::Multiplicative => '×',
        }
    }

    /// Symbol introducing inverted children in pretty-printed output.
    pub const fn inverse_symbol(self) -> char {
        match self {
            GroupKind::Additive => '−',
            GroupKind::Multiplicative => '÷',
        }
    }
}

/// Per-child operator tag.
///
/// Declaration order puts the forward tag of each group before its
/// inverse (`+` < `-`, `*` < `/`); canonical ordering relies on this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Tag {
    pub const fn new(group: GroupKind, inverted: bool) -> Tag {
        match (group, inverted) {
            (GroupKind::Additive, false) => Tag::Add,
            (GroupKind::Additive, true) => Tag::Subtract,
            (GroupKind::Multiplicative, false) => Tag::Multiply,
            (GroupKind::Multiplicative, true) => Tag::Divide,
        }
    }

    pub const fn group(self) -> GroupKind {
        match self {
            Tag::Add | Tag::Subtract => GroupKind::Additive,
            Tag::Multiply | Tag::Divide => GroupKind::Multiplicative,
        }
    }

    #[inline]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Tag::Subtract | Tag::Divide)
    }

    /// The other tag of the same group.
    pub const fn inverted(self) -> Tag {
        Tag::new(self.group(), !self.is_inverted())
    }

    /// ASCII form used in tag strings: `+`, `-`, `*`, `/`.
    pub const fn symbol(self) -> char {
        match self {
            Tag::Add => '+',
            Tag::Subtract => '-',
            Tag::Multiply => '*',
            Tag::Divide => '/',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Tag> {
        match symbol {
            '+' => Some(Tag::Add),
            '-' => Some(Tag::Subtract),
            '*' => Some(Tag::Multiply),
            '/' => Some(Tag::Divide),
            _ => None,
        }
    }
}

/// Tag list of one node. Solutions rarely combine more than six children.
pub type Tags = SmallVec<[Tag; 6]>;

/// A tag list that cannot form an [`OpNode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("operator node has no children")]
    Empty,
    #[error("{children} children but {tags} operator tags")]
    CountMismatch { children: usize, tags: usize },
    #[error("operator tags `{tags}` mix additive and multiplicative operators")]
    MixedGroups { tags: String },
    #[error("`{0}` is not an operator tag")]
    UnknownSymbol(char),
}

/// An expression tree reported by a solver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResultNode {
    Value(i64),
    Op(OpNode),
}

impl ResultNode {
    /// An operator node from children and an ASCII tag string such as `"+-"`.
    pub fn op(children: Vec<ResultNode>, tags: &str) -> Result<ResultNode, ShapeError> {
        OpNode::from_symbols(children, tags).map(ResultNode::Op)
    }

    /// Number of value leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            ResultNode::Value(_) => 1,
            ResultNode::Op(node) => node.children().iter().map(ResultNode::leaf_count).sum(),
        }
    }

    /// Leaf values in left-to-right order.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_values(&mut out);
        out
    }

    fn collect_values(&self, out: &mut Vec<i64>) {
        match self {
            ResultNode::Value(value) => out.push(*value),
            ResultNode::Op(node) => {
                for child in node.children() {
                    child.collect_values(out);
                }
            }
        }
    }
}

/// Children combined under one group kind.
///
/// Invariants, checked on construction: at least one child, one tag per
/// child, and every tag in the group of the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpNode {
    children: Vec<ResultNode>,
    tags: Tags,
}

impl OpNode {
    pub fn new(children: Vec<ResultNode>, tags: Tags) -> Result<Self, ShapeError> {
        let Some(first) = tags.first() else {
            return Err(ShapeError::Empty);
        };
        if children.len() != tags.len() {
            return Err(ShapeError::CountMismatch {
                children: children.len(),
                tags: tags.len(),
            });
        }
        if tags.iter().any(|tag| tag.group() != first.group()) {
            return Err(ShapeError::MixedGroups {
                tags: tags.iter().map(|tag| tag.symbol()).collect(),
            });
        }
        Ok(OpNode { children, tags })
    }

    /// Build from an ASCII tag string (`"+-"`, `"*/"`).
    pub fn from_symbols(children: Vec<ResultNode>, tags: &str) -> Result<Self, ShapeError> {
        let tags = tags
            .chars()
            .map(|symbol| Tag::from_symbol(symbol).ok_or(ShapeError::UnknownSymbol(symbol)))
            .collect::<Result<Tags, _>>()?;
        Self::new(children, tags)
    }

    /// Assemble parts already known to satisfy the invariants.
    pub(crate) fn from_parts(children: Vec<ResultNode>, tags: Tags) -> Self {
        debug_assert!(!tags.is_empty() && children.len() == tags.len());
        debug_assert!(tags.iter().all(|tag| tag.group() == tags[0].group()));
        OpNode { children, tags }
    }

    pub(crate) fn into_parts(self) -> (Vec<ResultNode>, Tags) {
        (self.children, self.tags)
    }

    /// Group kind, fixed by the first tag.
    pub fn group(&self) -> GroupKind {
        self.tags[0].group()
    }

    #[inline]
    pub fn children(&self) -> &[ResultNode] {
        &self.children
    }

    #[inline]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// `(tag, child)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (Tag, &ResultNode)> + '_ {
        self.tags.iter().copied().zip(&self.children)
    }

    /// Tags as an ASCII string, e.g. `"/*"`.
    pub fn tag_string(&self) -> String {
        self.tags.iter().map(|tag| tag.symbol()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

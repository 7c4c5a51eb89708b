//! Comparing the solution sets of two solvers.

use rustc_hash::FxHashMap;

use crate::key::Key;
use crate::node::ResultNode;

/// Canonical solutions with multiplicities.
///
/// Each distinct solution keeps the canonical form of its first occurrence
/// for display.
#[derive(Clone, Debug, Default)]
pub struct SolutionSet {
    entries: FxHashMap<Key, (ResultNode, usize)>,
    total: usize,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one solution; returns its canonical key.
    pub fn insert(&mut self, node: &ResultNode) -> Key {
        let canonical = node.canonical();
        let key = canonical.key();
        self.total += 1;
        let entry = self.entries.entry(key.clone()).or_insert((canonical, 0));
        entry.1 += 1;
        if entry.1 > 1 {
            tracing::trace!(%key, count = entry.1, "duplicate solution");
        }
        key
    }

    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a ResultNode>) -> Self {
        let mut set = Self::new();
        for node in nodes {
            set.insert(node);
        }
        set
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// How many inserted solutions had this key.
    pub fn count(&self, key: &Key) -> usize {
        self.entries.get(key).map_or(0, |(_, count)| *count)
    }

    /// Number of distinct solutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of solutions inserted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct canonical solutions, sorted by key.
    pub fn solutions(&self) -> Vec<&ResultNode> {
        self.sorted().into_iter().map(|(_, node, _)| node).collect()
    }

    /// Solutions inserted more than once, with their counts, sorted by key.
    pub fn duplicates(&self) -> Vec<(&ResultNode, usize)> {
        self.sorted()
            .into_iter()
            .filter(|(_, _, count)| *count > 1)
            .map(|(_, node, count)| (node, count))
            .collect()
    }

    fn sorted(&self) -> Vec<(&Key, &ResultNode, usize)> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .map(|(key, (node, count))| (key, node, *count))
            .collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }
}

/// Solutions found by only one of two solvers, canonical and sorted by key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub left_only: Vec<ResultNode>,
    pub right_only: Vec<ResultNode>,
}

impl Comparison {
    /// Both sides found the same distinct solutions.
    pub fn is_match(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty()
    }
}

/// Distinct solutions present on one side but not the other.
pub fn compare(left: &SolutionSet, right: &SolutionSet) -> Comparison {
    let only_in = |this: &SolutionSet, other: &SolutionSet| -> Vec<ResultNode> {
        this.sorted()
            .into_iter()
            .filter(|(key, _, _)| !other.contains(key))
            .map(|(_, node, _)| node.clone())
            .collect()
    };

    let comparison = Comparison {
        left_only: only_in(left, right),
        right_only: only_in(right, left),
    };
    tracing::debug!(
        left = left.len(),
        right = right.len(),
        left_only = comparison.left_only.len(),
        right_only = comparison.right_only.len(),
        "compared solution sets"
    );
    comparison
}

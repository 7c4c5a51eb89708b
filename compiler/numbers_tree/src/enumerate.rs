//! Exhaustive enumeration of tree shapes.
//!
//! Shapes with `k` leaves are produced by extending every shape with `k - 1`
//! leaves by a new leaf labelled `k - 1` (see [`TreeShape::extensions`]).
//! Levels are materialized eagerly; each level's order is fixed by the order
//! of the level below it, so repeated runs produce identical sequences.

use crate::TreeShape;

/// Every distinct shape with exactly `n_leaves` labelled leaves, in generation order.
///
/// Returns an empty list for `n_leaves == 0`.
pub fn all_trees(n_leaves: usize) -> Vec<TreeShape> {
    Topologies::up_to(n_leaves)
        .into_levels()
        .pop()
        .unwrap_or_default()
}

/// Shapes for every leaf count `1..=max_leaves`, built level by level.
///
/// The compiler needs all levels up to the card count; building them
/// together enumerates each level once.
#[derive(Clone, Debug)]
pub struct Topologies {
    /// `levels[k - 1]` holds the shapes with `k` leaves.
    levels: Vec<Vec<TreeShape>>,
}

impl Topologies {
    pub fn up_to(max_leaves: usize) -> Self {
        let mut levels: Vec<Vec<TreeShape>> = Vec::with_capacity(max_leaves);
        for n_leaves in 1..=max_leaves {
            let level = match levels.last() {
                None => vec![TreeShape::Leaf(0)],
                Some(previous) => previous
                    .iter()
                    .flat_map(|shape| shape.extensions(n_leaves - 1))
                    .collect(),
            };
            tracing::debug!(n_leaves, n_shapes = level.len(), "enumerated tree shapes");
            levels.push(level);
        }
        Topologies { levels }
    }

    /// Largest leaf count enumerated.
    #[inline]
    pub fn max_leaves(&self) -> usize {
        self.levels.len()
    }

    /// Shapes with exactly `n_leaves` leaves; empty when out of range.
    pub fn with_leaves(&self, n_leaves: usize) -> &[TreeShape] {
        n_leaves
            .checked_sub(1)
            .and_then(|index| self.levels.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `(n_leaves, shapes)` for each level in increasing leaf count.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[TreeShape])> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, level)| (index + 1, level.as_slice()))
    }

    fn into_levels(self) -> Vec<Vec<TreeShape>> {
        self.levels
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

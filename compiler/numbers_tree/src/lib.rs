//! Expression-tree topologies for the numbers puzzle.
//!
//! A solution to the puzzle is an arithmetic expression over some of the
//! cards. Ignoring which operator sits at each node and which card sits at
//! each leaf, what remains is the *shape* of the expression. This crate
//! enumerates every such shape exactly once and turns shapes into trees the
//! bytecode compiler can lower.
//!
//! # Pipeline Position
//!
//! ```text
//! **Enumerate shapes** → Annotate operators → Substitute slots → Lower (numbers_bytecode)
//! ```
//!
//! # Tree Families
//!
//! - [`TreeShape`]: bare n-ary topology, leaves labelled by creation order.
//! - [`AnnotatedTree`]: every internal node carries an [`OperatorKind`],
//!   alternating between parent and child.
//! - [`ValuedTree`]: leaves carry concrete operand-slot indices.
//!
//! Every tree is built bottom-up in one pass and never mutated afterwards.

mod annotated;
mod enumerate;
mod shape;

pub use annotated::{AnnotatedTree, OperatorKind, ValuedTree};
pub use enumerate::{all_trees, Topologies};
pub use shape::TreeShape;

//! Solver results for the numbers puzzle: parsing, canonical form, printing.
//!
//! Two independent solver engines print their solutions as postfix token
//! lines. Solutions that differ only in operand order, in how an associative
//! chain is grouped, or in where a subtraction or division is nested are the
//! same solution. This crate reduces each result to a canonical form whose
//! [`Key`] can be hashed and compared, so the engines' outputs can be diffed.
//!
//! # Pipeline Position
//!
//! ```text
//! solver stdout → **Parse** → **Flatten → Sort** → Key / pretty-print → compare
//! ```
//!
//! # Representation
//!
//! A [`ResultNode`] is either a value or an [`OpNode`]: a list of children,
//! each paired with a [`Tag`]. All tags of one node belong to one
//! [`GroupKind`]; the tag says whether its child is combined forward
//! (`+`, `*`) or inverted (`-`, `/`).

mod canon;
mod compare;
mod eval;
mod key;
mod node;
mod parse;
mod pretty;

pub use canon::{canonicalize, flatten, sort_canonical};
pub use compare::{compare, Comparison, SolutionSet};
pub use key::{Key, KeyEntry};
pub use node::{GroupKind, OpNode, ResultNode, ShapeError, Tag, Tags};
pub use parse::{
    parse_line, parse_numbered, parse_output, parse_tokens, LineError, ParseError, MAX_NESTING,
};

//! Lowering valued trees to postfix opcodes.

use numbers_tree::ValuedTree;

use crate::opcode::{EncodeError, Opcode};

/// Postfix opcodes for `tree`: children first, then the node's own
/// arity-tagged combining opcode. No trailing `Return`.
pub fn lower(tree: &ValuedTree) -> Result<Vec<Opcode>, EncodeError> {
    let mut out = Vec::new();
    lower_into(tree, &mut out)?;
    Ok(out)
}

/// Append the postfix opcodes for `tree` to `out`.
///
/// On error `out` may hold a partial program; callers discard it.
pub fn lower_into(tree: &ValuedTree, out: &mut Vec<Opcode>) -> Result<(), EncodeError> {
    match tree {
        ValuedTree::Slot(slot) => out.push(Opcode::value(*slot)?),
        ValuedTree::Chain { kind, children } => {
            for child in children {
                lower_into(child, out)?;
            }
            out.push(Opcode::chain(*kind, children.len())?);
        }
    }
    Ok(())
}

/// A complete program: the postfix opcodes followed by `Return`.
pub fn lower_program(tree: &ValuedTree) -> Result<Vec<Opcode>, EncodeError> {
    let mut out = lower(tree)?;
    out.push(Opcode::RETURN);
    Ok(out)
}

//! Packed bytecode programs for the numbers puzzle.
//!
//! The tree solver does not search over expressions directly. Instead it
//! runs every program in a precompiled stream against the cards it was
//! given. This crate produces that stream.
//!
//! # Pipeline Position
//!
//! ```text
//! numbers_tree (shapes) → Annotate → Substitute slots → **Lower → Pack** → solver engine
//! ```
//!
//! # Format
//!
//! Each opcode is one byte: the high nibble is the [`OpcodeKind`] ordinal
//! and the low nibble its argument (operand slot or arity). A program is a
//! postfix opcode sequence ending in `Return`; the stream is every program
//! for `1..=N` cards followed by one sentinel `Return`. There is no header
//! or length prefix, so a consumer must know `N` to interpret the subset
//! order.

mod combinations;
mod compile;
mod disasm;
mod emit;
mod lower;
mod opcode;

pub use combinations::{binomial, Combinations};
pub use compile::{
    compile, expected_program_count, CompileError, CompiledPrograms, MAX_CARDS, PRACTICAL_MAX_CARDS,
};
pub use disasm::{disassemble, DecodeError, Program};
pub use emit::{artifact_symbol, c_header, hex_listing};
pub use lower::{lower, lower_into, lower_program};
pub use opcode::{EncodeError, Opcode, OpcodeKind, MAX_ARG};

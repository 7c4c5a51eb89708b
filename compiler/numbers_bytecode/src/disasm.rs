//! Decoding a packed stream back into programs.

use std::fmt;

use crate::opcode::{Opcode, OpcodeKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("byte 0x{byte:02X} at offset {offset} is not a valid opcode")]
    UnknownOpcode { offset: usize, byte: u8 },
    #[error("{op} at offset {offset} needs {needed} stack entries but only {available} are present")]
    StackUnderflow {
        offset: usize,
        op: Opcode,
        needed: usize,
        available: usize,
    },
    #[error("{op} at offset {offset} combines fewer than two entries")]
    DegenerateArity { offset: usize, op: Opcode },
    #[error("Return at offset {offset} leaves {depth} stack entries (expected exactly one)")]
    UnbalancedReturn { offset: usize, depth: usize },
    #[error("program starting at offset {offset} has no Return")]
    UnterminatedProgram { offset: usize },
    #[error("stream has no sentinel Return")]
    MissingSentinel,
    #[error("{count} bytes follow the sentinel Return at offset {offset}")]
    TrailingBytes { offset: usize, count: usize },
}

/// One decoded program, including its final `Return`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    opcodes: Vec<Opcode>,
}

impl Program {
    #[inline]
    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    /// Number of `Value` instructions, i.e. operand slots read.
    pub fn n_operands(&self) -> usize {
        self.opcodes
            .iter()
            .filter(|op| op.kind() == OpcodeKind::Value)
            .count()
    }

    /// Highest operand slot the program reads; `None` if it reads none.
    pub fn max_slot(&self) -> Option<usize> {
        self.opcodes
            .iter()
            .filter(|op| op.kind() == OpcodeKind::Value)
            .filter_map(|op| op.arg())
            .map(usize::from)
            .max()
    }

    /// Render in the solver's text protocol with concrete card values,
    /// e.g. `V(25) V(7) A(++) R`. Every child is marked non-inverted.
    ///
    /// Returns `None` if a slot has no entry in `values`.
    pub fn to_solver_tokens(&self, values: &[i64]) -> Option<String> {
        let mut tokens = Vec::with_capacity(self.opcodes.len());
        for op in &self.opcodes {
            let token = match (op.kind(), op.arg()) {
                (OpcodeKind::Value, Some(slot)) => {
                    format!("V({})", values.get(usize::from(slot))?)
                }
                (kind @ (OpcodeKind::AddN | OpcodeKind::MultiplyN), Some(arity)) => {
                    format!("{}({})", kind.letter(), "+".repeat(usize::from(arity)))
                }
                _ => "R".to_string(),
            };
            tokens.push(token);
        }
        Some(tokens.join(" "))
    }
}

/// Listing form: `V0 V1 A2 R`.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, op) in self.opcodes.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Split a packed stream into its programs, checking stack discipline.
///
/// Every program must leave exactly one entry on the stack at its
/// `Return`, and the stream must end with exactly one sentinel `Return`.
pub fn disassemble(bytes: &[u8]) -> Result<Vec<Program>, DecodeError> {
    let mut programs = Vec::new();
    let mut current = Vec::new();
    let mut program_start = 0;
    let mut depth = 0usize;

    for (offset, &byte) in bytes.iter().enumerate() {
        let op = Opcode::decode(byte).ok_or(DecodeError::UnknownOpcode { offset, byte })?;

        match (op.kind(), op.arg()) {
            // A Return with nothing before it is the sentinel.
            (OpcodeKind::Return, _) if current.is_empty() => {
                let count = bytes.len() - offset - 1;
                if count > 0 {
                    return Err(DecodeError::TrailingBytes { offset, count });
                }
                return Ok(programs);
            }
            (OpcodeKind::Return, _) => {
                if depth != 1 {
                    return Err(DecodeError::UnbalancedReturn { offset, depth });
                }
                current.push(op);
                programs.push(Program {
                    opcodes: std::mem::take(&mut current),
                });
                depth = 0;
                program_start = offset + 1;
                continue;
            }
            (OpcodeKind::Value, _) => depth += 1,
            (_, arity) => {
                let needed = usize::from(arity.unwrap_or(0));
                if needed < 2 {
                    return Err(DecodeError::DegenerateArity { offset, op });
                }
                if depth < needed {
                    return Err(DecodeError::StackUnderflow {
                        offset,
                        op,
                        needed,
                        available: depth,
                    });
                }
                depth = depth - needed + 1;
            }
        }
        current.push(op);
    }

    if current.is_empty() {
        Err(DecodeError::MissingSentinel)
    } else {
        Err(DecodeError::UnterminatedProgram {
            offset: program_start,
        })
    }
}

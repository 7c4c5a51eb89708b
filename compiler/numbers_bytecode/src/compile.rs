//! Compiling every expression shape into one packed program stream.

use numbers_tree::{OperatorKind, Topologies};

use crate::combinations::{binomial, Combinations};
use crate::lower::lower_into;
use crate::opcode::{EncodeError, Opcode, MAX_ARG};

/// Largest card count whose slots and arities all fit in 4 bits.
pub const MAX_CARDS: usize = MAX_ARG as usize;

/// Largest card count that compiles in reasonable memory.
///
/// Every shape level is held in memory at once: 660,032 shapes for 8
/// leaves, 12.8M for 9 and 282M for 10. Counts above this are accepted up
/// to [`MAX_CARDS`] but will usually exhaust memory.
pub const PRACTICAL_MAX_CARDS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("cannot compile programs for {0} cards (at most {max} fit the 4-bit opcode fields)", max = MAX_CARDS)]
    TooManyCards(usize),
    #[error("while compiling {n_cards}-card programs: {source}")]
    Encode {
        n_cards: usize,
        #[source]
        source: EncodeError,
    },
}

/// The packed program stream for one card count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledPrograms {
    n_cards: usize,
    n_programs: usize,
    bytes: Vec<u8>,
}

impl CompiledPrograms {
    /// Card count `N` the stream was compiled for.
    #[inline]
    pub fn n_cards(&self) -> usize {
        self.n_cards
    }

    /// Number of programs, not counting the trailing sentinel.
    #[inline]
    pub fn n_programs(&self) -> usize {
        self.n_programs
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Compile every program using between 1 and `n_cards` operand slots.
///
/// For each `k` in `1..=n_cards`, every `k`-leaf shape is annotated with an
/// additive root (kinds alternating downward), then instantiated with every
/// `k`-subset of the slots in ascending lexicographic order, leaf labels
/// taking subset elements in order. Programs are emitted in that order,
/// increasing `k`, then shape, then subset, and the stream ends in one
/// extra `Return`.
pub fn compile(n_cards: usize) -> Result<CompiledPrograms, CompileError> {
    if n_cards > MAX_CARDS {
        return Err(CompileError::TooManyCards(n_cards));
    }

    if n_cards > PRACTICAL_MAX_CARDS {
        tracing::warn!(
            n_cards,
            practical_max = PRACTICAL_MAX_CARDS,
            "enumerating shapes for this many cards needs a very large amount of memory"
        );
    }

    let topologies = Topologies::up_to(n_cards);
    let mut bytes = Vec::new();
    let mut n_programs = 0;
    let mut scratch = Vec::new();

    for (n_leaves, shapes) in topologies.iter() {
        let subsets: Vec<Vec<usize>> = Combinations::new(n_cards, n_leaves).collect();
        let bytes_before = bytes.len();

        for shape in shapes {
            let annotated = shape.annotate(OperatorKind::AddChain);
            for subset in &subsets {
                scratch.clear();
                lower_into(&annotated.with_slots(subset), &mut scratch)
                    .map_err(|source| CompileError::Encode { n_cards, source })?;
                scratch.push(Opcode::RETURN);
                bytes.extend(scratch.iter().map(|op| op.encode()));
                n_programs += 1;
            }
        }

        tracing::debug!(
            n_leaves,
            n_shapes = shapes.len(),
            n_subsets = subsets.len(),
            n_bytes = bytes.len() - bytes_before,
            "compiled programs"
        );
    }

    bytes.push(Opcode::RETURN.encode());
    tracing::debug!(n_cards, n_programs, n_bytes = bytes.len(), "program stream complete");

    Ok(CompiledPrograms {
        n_cards,
        n_programs,
        bytes,
    })
}

/// Σ over `k` of (shapes with `k` leaves) × C(`n_cards`, `k`).
///
/// Enumerates the shapes, so this is as expensive as compiling.
pub fn expected_program_count(n_cards: usize) -> usize {
    Topologies::up_to(n_cards)
        .iter()
        .map(|(n_leaves, shapes)| shapes.len() * binomial(n_cards, n_leaves))
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

//! One-byte stack-machine instructions.

use std::fmt;

use numbers_tree::OperatorKind;

/// Largest argument (operand slot or arity) a 4-bit field can hold.
pub const MAX_ARG: u8 = 0x0F;

/// Instruction kind, stored in the high nibble.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpcodeKind {
    /// Push the card in the given slot.
    Value = 0,
    /// Pop `arity` entries, push a multiplicative combination.
    MultiplyN = 1,
    /// Pop `arity` entries, push an additive combination.
    AddN = 2,
    /// End of program (or, on its own, end of stream).
    Return = 3,
}

impl OpcodeKind {
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(OpcodeKind::Value),
            1 => Some(OpcodeKind::MultiplyN),
            2 => Some(OpcodeKind::AddN),
            3 => Some(OpcodeKind::Return),
            _ => None,
        }
    }

    /// Single-letter head used in listings and in the solver's text output.
    pub const fn letter(self) -> char {
        match self {
            OpcodeKind::Value => 'V',
            OpcodeKind::MultiplyN => 'M',
            OpcodeKind::AddN => 'A',
            OpcodeKind::Return => 'R',
        }
    }
}

impl From<OperatorKind> for OpcodeKind {
    fn from(kind: OperatorKind) -> Self {
        match kind {
            OperatorKind::AddChain => OpcodeKind::AddN,
            OperatorKind::MultiplyChain => OpcodeKind::MultiplyN,
        }
    }
}

/// An argument did not fit in four bits. Arguments are never truncated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{kind:?} argument {arg} does not fit in 4 bits (max {max})", max = MAX_ARG)]
    ArgOutOfRange { kind: OpcodeKind, arg: usize },
}

/// A validated instruction. The argument always fits in four bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Opcode {
    kind: OpcodeKind,
    arg: u8,
}

impl Opcode {
    pub const RETURN: Opcode = Opcode {
        kind: OpcodeKind::Return,
        arg: 0,
    };

    /// Push operand `slot`.
    pub fn value(slot: usize) -> Result<Self, EncodeError> {
        Self::with_arg(OpcodeKind::Value, slot)
    }

    /// Combine the top `arity` stack entries with `kind`.
    pub fn chain(kind: OperatorKind, arity: usize) -> Result<Self, EncodeError> {
        Self::with_arg(kind.into(), arity)
    }

    fn with_arg(kind: OpcodeKind, arg: usize) -> Result<Self, EncodeError> {
        match u8::try_from(arg) {
            Ok(arg) if arg <= MAX_ARG => Ok(Opcode { kind, arg }),
            _ => Err(EncodeError::ArgOutOfRange { kind, arg }),
        }
    }

    #[inline]
    pub const fn kind(self) -> OpcodeKind {
        self.kind
    }

    /// Slot for `Value`, arity for `MultiplyN`/`AddN`, nothing for `Return`.
    #[inline]
    pub const fn arg(self) -> Option<u8> {
        match self.kind {
            OpcodeKind::Return => None,
            _ => Some(self.arg),
        }
    }

    /// Pack into one byte: kind ordinal in the high nibble, argument in the low.
    #[inline]
    pub const fn encode(self) -> u8 {
        (self.kind.ordinal() << 4) | self.arg
    }

    /// Unpack one byte. `None` for an unknown kind or a `Return` carrying an argument.
    pub const fn decode(byte: u8) -> Option<Self> {
        let Some(kind) = OpcodeKind::from_ordinal(byte >> 4) else {
            return None;
        };
        let arg = byte & MAX_ARG;
        if matches!(kind, OpcodeKind::Return) && arg != 0 {
            return None;
        }
        Some(Opcode { kind, arg })
    }
}

/// Compact listing form: `V5`, `M3`, `A2`, `R`.
impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arg() {
            Some(arg) => write!(f, "{}{arg}", self.kind.letter()),
            None => write!(f, "{}", self.kind.letter()),
        }
    }
}

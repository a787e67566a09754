use crate::{Immediate, Operand};
use std::fmt::{Display, Formatter};

/// Representation of a single decoded MOV instruction.
///
/// The destination is never an immediate.  When the destination is a memory
/// operand and the source is an immediate, rendering carries an explicit
/// `byte`/`word` qualifier, because the operand width is not recoverable from
/// the addressing expression alone.
///
/// ```rust
/// use mvd_instruction::*;
///
/// // mov [bp + di], byte 7
/// let i = MovInstruction::new(
///     Operand::Memory(EffectiveAddress {
///         base: AddressBase::Pair(RegisterPair(Register::Bp, Register::Di)),
///         displacement: Displacement::None,
///     }),
///     Operand::Immediate(Immediate::Byte(7)),
/// );
/// assert_eq!(i.to_string(), "mov [bp + di], byte 7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovInstruction {
    pub destination: Operand,
    pub source: Operand,
}

impl MovInstruction {
    pub fn new(destination: Operand, source: Operand) -> Self {
        Self {
            destination,
            source,
        }
    }
}

impl Display for MovInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let qualifier = match (self.destination, self.source) {
            (
                Operand::Memory(_) | Operand::Direct(_),
                Operand::Immediate(Immediate::Byte(_)),
            ) => "byte ",
            (
                Operand::Memory(_) | Operand::Direct(_),
                Operand::Immediate(Immediate::Word(_)),
            ) => "word ",
            _ => "",
        };

        write!(f, "mov {}, {}{}", self.destination, qualifier, self.source)
    }
}

use crate::errors::Result;
use crate::reader::CodeStream;
use mvd_instruction::{
    AddressBase, Displacement, EffectiveAddress, Operand, OperandSize, Register, RegisterPair,
};

/// The three bit fields of the addressing byte.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ModRegRm {
    pub mode: u8,
    pub reg: u8,
    pub rm: u8,
}

impl ModRegRm {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            mode: byte >> 6,
            reg: byte >> 3 & 0b111,
            rm: byte & 0b111,
        }
    }
}

/// Blueprint for one row of the effective address table: the base expression
/// plus the width of the displacement that follows on the wire.
#[derive(Clone, Copy)]
struct AddressTemplate {
    base: AddressBase,
    displacement: Option<OperandSize>,
}

const fn pair(
    left: Register,
    right: Register,
    displacement: Option<OperandSize>,
) -> Option<AddressTemplate> {
    Some(AddressTemplate {
        base: AddressBase::Pair(RegisterPair(left, right)),
        displacement,
    })
}

const fn single(register: Register, displacement: Option<OperandSize>) -> Option<AddressTemplate> {
    Some(AddressTemplate {
        base: AddressBase::Register(register),
        displacement,
    })
}

/// Effective address blueprints, indexed by `(mod * 8) + rm` for mod 0..=2.
/// Rows are immutable; resolution copies a row into a fresh
/// [EffectiveAddress] so decoded operands never share state.  The hole at
/// row 6 (mod = 0, r/m = 110) is the direct address encoding.
#[rustfmt::skip]
const EFFECTIVE_ADDRESS_TABLE: [Option<AddressTemplate>; 24] = [
    // mod = 00: no displacement.
    pair(Register::Bx, Register::Si, None),
    pair(Register::Bx, Register::Di, None),
    pair(Register::Bp, Register::Si, None),
    pair(Register::Bp, Register::Di, None),
    single(Register::Si, None),
    single(Register::Di, None),
    None, // direct address
    single(Register::Bx, None),
    // mod = 01: 8-bit displacement.
    pair(Register::Bx, Register::Si, Some(OperandSize::Byte)),
    pair(Register::Bx, Register::Di, Some(OperandSize::Byte)),
    pair(Register::Bp, Register::Si, Some(OperandSize::Byte)),
    pair(Register::Bp, Register::Di, Some(OperandSize::Byte)),
    single(Register::Si, Some(OperandSize::Byte)),
    single(Register::Di, Some(OperandSize::Byte)),
    single(Register::Bp, Some(OperandSize::Byte)),
    single(Register::Bx, Some(OperandSize::Byte)),
    // mod = 10: 16-bit displacement.
    pair(Register::Bx, Register::Si, Some(OperandSize::Word)),
    pair(Register::Bx, Register::Di, Some(OperandSize::Word)),
    pair(Register::Bp, Register::Si, Some(OperandSize::Word)),
    pair(Register::Bp, Register::Di, Some(OperandSize::Word)),
    single(Register::Si, Some(OperandSize::Word)),
    single(Register::Di, Some(OperandSize::Word)),
    single(Register::Bp, Some(OperandSize::Word)),
    single(Register::Bx, Some(OperandSize::Word)),
];

/// Resolve the r/m side of an addressing byte into an operand, consuming any
/// displacement or direct address bytes the mode calls for.
pub(crate) fn register_or_memory(
    operand_size: OperandSize,
    mode: u8,
    rm: u8,
    stream: &mut CodeStream,
) -> Result<Operand> {
    assert!(mode <= 0b11 && rm <= 0b111);

    if mode == 0b11 {
        return Ok(Operand::Register(Register::from_encoding(operand_size, rm)));
    }

    match EFFECTIVE_ADDRESS_TABLE[(mode as usize) * 8 + rm as usize] {
        None => Ok(Operand::Direct(stream.read_u16()?)),

        Some(template) => {
            let displacement = match template.displacement {
                None => Displacement::None,
                Some(width) => stream.read_displacement(width)?,
            };

            Ok(Operand::Memory(EffectiveAddress {
                base: template.base,
                displacement,
            }))
        }
    }
}

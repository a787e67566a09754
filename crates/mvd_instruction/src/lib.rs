//! This crate holds the structs and constants to represent a MOV instruction
//! for the 8086 microprocessor, together with its NASM-compatible text
//! rendering.

mod instruction;
mod operand;
mod register;

pub use instruction::MovInstruction;
pub use operand::{
    AddressBase, Displacement, EffectiveAddress, Immediate, Operand, OperandSize,
};
pub use register::{Register, RegisterPair, REGISTER_TABLE};

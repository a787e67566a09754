use crate::errors::{DecodeError, Result};
use crate::form::{classify, OpCodeForm};
use crate::mrrm::{register_or_memory, ModRegRm};
use crate::reader::{CodeStream, OpCodeExt};
use mvd_instruction::{MovInstruction, Operand, Register};
use tracing::debug;

// 1 0 0 0 1 0 d w | mod reg r/m | disp-lo | disp-hi
fn register_or_memory_to_from_register(
    op_code: u8,
    stream: &mut CodeStream,
) -> Result<MovInstruction> {
    let operand_size = op_code.operand_size();
    let reg_is_destination = (op_code >> 1) & 0b1 == 1;

    let fields = ModRegRm::from_byte(stream.read_u8()?);
    debug!(
        "r/m <-> r: d={} mod={:02b} reg={:03b} rm={:03b}",
        reg_is_destination as u8, fields.mode, fields.reg, fields.rm
    );

    let register = Operand::Register(Register::from_encoding(operand_size, fields.reg));
    let register_or_memory = register_or_memory(operand_size, fields.mode, fields.rm, stream)?;

    Ok(if reg_is_destination {
        MovInstruction::new(register, register_or_memory)
    } else {
        MovInstruction::new(register_or_memory, register)
    })
}

// 1 1 0 0 0 1 1 w | mod 0 0 0 r/m | disp-lo | disp-hi | data | data if w = 1
fn immediate_to_register_or_memory(
    op_code: u8,
    stream: &mut CodeStream,
) -> Result<MovInstruction> {
    let operand_size = op_code.operand_size();

    let fields = ModRegRm::from_byte(stream.read_u8()?);
    debug!(
        "imm -> r/m: mod={:02b} rm={:03b}",
        fields.mode, fields.rm
    );

    let destination = register_or_memory(operand_size, fields.mode, fields.rm, stream)?;
    let source = Operand::Immediate(stream.read_immediate(operand_size)?);

    Ok(MovInstruction::new(destination, source))
}

// 1 0 1 1 w reg | data | data if w = 1
fn immediate_to_register(op_code: u8, stream: &mut CodeStream) -> Result<MovInstruction> {
    // The w bit sits in the 4th position for this form.
    let operand_size = (op_code >> 3).operand_size();

    debug!("imm -> reg: reg={:03b}", op_code & 0b111);

    let destination = Operand::Register(Register::from_encoding(operand_size, op_code & 0b111));
    let source = Operand::Immediate(stream.read_immediate(operand_size)?);

    Ok(MovInstruction::new(destination, source))
}

// 1 0 1 0 0 0 d w | addr-lo | addr-hi
fn accumulator_to_from_memory(op_code: u8, stream: &mut CodeStream) -> Result<MovInstruction> {
    let operand_size = op_code.operand_size();
    let memory_is_destination = (op_code >> 1) & 0b1 == 1;

    let accumulator = Operand::Register(Register::from_encoding(operand_size, 0b000));
    let memory = Operand::Direct(stream.read_u16()?);

    debug!(
        "acc <-> mem: d={} memory={}",
        memory_is_destination as u8, memory
    );

    Ok(if memory_is_destination {
        MovInstruction::new(memory, accumulator)
    } else {
        MovInstruction::new(accumulator, memory)
    })
}

/// Decode a single MOV instruction off the front of the stream.
pub fn decode_instruction(stream: &mut CodeStream) -> Result<MovInstruction> {
    let offset = stream.position();
    let op_code = stream.read_u8()?;

    match classify(op_code) {
        Some(OpCodeForm::ImmediateToRegisterOrMemory) => {
            immediate_to_register_or_memory(op_code, stream)
        }
        Some(OpCodeForm::AccumulatorToFromMemory) => accumulator_to_from_memory(op_code, stream),
        Some(OpCodeForm::RegisterOrMemoryToFromRegister) => {
            register_or_memory_to_from_register(op_code, stream)
        }
        Some(OpCodeForm::ImmediateToRegister) => immediate_to_register(op_code, stream),
        None => Err(DecodeError::InvalidOpCode { op_code, offset }),
    }
}

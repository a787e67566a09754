use crate::errors::{DecodeError, Result};
use mvd_instruction::{Displacement, Immediate, OperandSize};

pub trait OpCodeExt {
    fn operand_size(self) -> OperandSize;
}

impl OpCodeExt for u8 {
    fn operand_size(self) -> OperandSize {
        if self & 0b1 == 0 {
            OperandSize::Byte
        } else {
            OperandSize::Word
        }
    }
}

/// Sequential reader over the raw instruction stream.  The position advances
/// strictly forward and is carried into decode errors.
pub struct CodeStream<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> CodeStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        match self.data.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(DecodeError::UnexpectedEndOfStream {
                offset: self.position,
            }),
        }
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes([self.read_u8()?, self.read_u8()?]))
    }

    pub fn read_immediate(&mut self, operand_size: OperandSize) -> Result<Immediate> {
        Ok(match operand_size {
            OperandSize::Byte => Immediate::Byte(self.read_u8()?),
            OperandSize::Word => Immediate::Word(self.read_u16()?),
        })
    }

    pub fn read_displacement(&mut self, operand_size: OperandSize) -> Result<Displacement> {
        Ok(match operand_size {
            OperandSize::Byte => Displacement::Byte(self.read_u8()? as i8),
            OperandSize::Word => Displacement::Word(self.read_u16()? as i16),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_compose_little_endian() {
        let mut stream = CodeStream::new(&[0x12, 0x34]);
        assert_eq!(stream.read_u16(), Ok(0x3412));
        assert_eq!(stream.position(), 2);
        assert!(stream.is_empty());
    }

    #[test]
    fn displacements_sign_extend() {
        let mut stream = CodeStream::new(&[0x80]);
        assert_eq!(
            stream.read_displacement(OperandSize::Byte),
            Ok(Displacement::Byte(-128))
        );

        let mut stream = CodeStream::new(&[0xD4, 0xFE]);
        assert_eq!(
            stream.read_displacement(OperandSize::Word),
            Ok(Displacement::Word(-300))
        );
    }

    #[test]
    fn immediates_stay_unsigned() {
        let mut stream = CodeStream::new(&[0xF4]);
        assert_eq!(
            stream.read_immediate(OperandSize::Byte),
            Ok(Immediate::Byte(244))
        );

        let mut stream = CodeStream::new(&[0xF4, 0xFF]);
        assert_eq!(
            stream.read_immediate(OperandSize::Word),
            Ok(Immediate::Word(65524))
        );
    }

    #[test]
    fn reads_past_the_end_report_the_offset() {
        let mut stream = CodeStream::new(&[0x01]);
        assert_eq!(stream.read_u8(), Ok(0x01));
        assert_eq!(
            stream.read_u8(),
            Err(DecodeError::UnexpectedEndOfStream { offset: 1 })
        );

        // A word read that runs out after its first byte fails on the second.
        let mut stream = CodeStream::new(&[0x01]);
        assert_eq!(
            stream.read_u16(),
            Err(DecodeError::UnexpectedEndOfStream { offset: 1 })
        );
    }
}

/// The four encodings of the 8086 MOV instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpCodeForm {
    /// `1 1 0 0 0 1 1 w` — immediate to register or memory.
    ImmediateToRegisterOrMemory,
    /// `1 0 1 1 w reg` — immediate to register.
    ImmediateToRegister,
    /// `1 0 1 0 0 0 d w` — accumulator to or from a direct address.
    AccumulatorToFromMemory,
    /// `1 0 0 0 1 0 d w` — register or memory to or from a register.
    RegisterOrMemoryToFromRegister,
}

/// Recognized opcode prefixes, longest mask first.  The order is part of the
/// decode contract: the first matching row wins, so a longer prefix can never
/// be swallowed by a shorter one.  Keep it sorted when adding rows.
const FORMS: [(u8, u8, OpCodeForm); 4] = [
    (
        0b1111_1110,
        0b1100_0110,
        OpCodeForm::ImmediateToRegisterOrMemory,
    ),
    (
        0b1111_1100,
        0b1010_0000,
        OpCodeForm::AccumulatorToFromMemory,
    ),
    (
        0b1111_1100,
        0b1000_1000,
        OpCodeForm::RegisterOrMemoryToFromRegister,
    ),
    (0b1111_0000, 0b1011_0000, OpCodeForm::ImmediateToRegister),
];

/// Select the MOV encoding form for an opcode byte, or `None` for anything
/// outside the MOV family.
pub fn classify(op_code: u8) -> Option<OpCodeForm> {
    FORMS
        .iter()
        .find(|(mask, value, _)| op_code & mask == *value)
        .map(|(_, _, form)| *form)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn immediate_to_register_or_memory() {
        for op_code in [0xC6, 0xC7] {
            assert_eq!(
                classify(op_code),
                Some(OpCodeForm::ImmediateToRegisterOrMemory)
            );
        }
    }

    #[test]
    fn immediate_to_register() {
        for op_code in 0xB0..=0xBF {
            assert_eq!(classify(op_code), Some(OpCodeForm::ImmediateToRegister));
        }
    }

    #[test]
    fn accumulator_to_from_memory() {
        for op_code in 0xA0..=0xA3 {
            assert_eq!(classify(op_code), Some(OpCodeForm::AccumulatorToFromMemory));
        }
    }

    #[test]
    fn register_or_memory_to_from_register() {
        for op_code in 0x88..=0x8B {
            assert_eq!(
                classify(op_code),
                Some(OpCodeForm::RegisterOrMemoryToFromRegister)
            );
        }
    }

    #[test]
    fn everything_else_is_unsupported() {
        for op_code in 0x00..=0xFFu8 {
            let supported = matches!(op_code, 0x88..=0x8B | 0xA0..=0xA3 | 0xB0..=0xBF | 0xC6 | 0xC7);
            assert_eq!(classify(op_code).is_some(), supported, "{:#04x}", op_code);
        }
    }
}

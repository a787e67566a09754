use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid op code ({op_code:#04x}) at offset {offset}")]
    InvalidOpCode { op_code: u8, offset: usize },

    #[error("could not fetch extra bytes from stream (offset {offset})")]
    UnexpectedEndOfStream { offset: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

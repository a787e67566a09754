use crate::decode::decode_instruction;
use crate::errors::Result;
use crate::reader::CodeStream;

/// Decode a whole binary into an assembly program.
///
/// The text starts with a `bits 16` directive so nasm targets 16-bit mode,
/// followed by one line per instruction in stream order.  Any decode failure
/// aborts the pass; no partial program is returned.
pub fn disassemble(data: &[u8]) -> Result<String> {
    let mut stream = CodeStream::new(data);
    let mut program = String::from("bits 16\n\n");

    while !stream.is_empty() {
        let instruction = decode_instruction(&mut stream)?;
        program.push_str(&instruction.to_string());
        program.push('\n');
    }

    Ok(program)
}

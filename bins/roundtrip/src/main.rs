//! Round-trip checker: disassemble a binary, reassemble the text with nasm
//! and byte-compare the result against the original input.

use mvd_decoder::disassemble;
use std::fs::File;
use std::io::{Read, Write};
use std::process::{Command, Stdio};

fn read_file(path: &str) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    File::open(path)?.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn round_trip(path: &str) -> std::io::Result<bool> {
    let original = read_file(path)?;

    let program = match disassemble(original.as_slice()) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            return Ok(false);
        }
    };

    let asm_path = format!("{}_rt.asm", path);
    let bin_path = format!("{}_rt", path);

    File::create(&asm_path)?.write_all(program.as_bytes())?;

    let status = Command::new("nasm")
        .stderr(Stdio::null())
        .arg(&asm_path)
        .arg("-f")
        .arg("bin")
        .arg("-o")
        .arg(&bin_path)
        .status()?;

    let passed = status.success() && read_file(&bin_path)? == original;

    let _ = std::fs::remove_file(&asm_path);
    let _ = std::fs::remove_file(&bin_path);

    Ok(passed)
}

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        eprintln!("usage: roundtrip <binary>...");
        std::process::exit(2);
    }

    println!("Running {} test(s).\n", paths.len());

    let mut failed = false;
    for path in paths.iter() {
        let passed = match round_trip(path) {
            Ok(passed) => passed,
            Err(err) => {
                eprintln!("{}: {}", path, err);
                false
            }
        };

        println!("{} \t\t ({})", passed, path);
        failed |= !passed;
    }

    if failed {
        std::process::exit(1);
    }
}

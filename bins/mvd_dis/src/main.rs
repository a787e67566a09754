use mvd_decoder::disassemble;
use std::io::Read;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    /// The binary file to disassemble
    binary: String,
}

fn load_binary(path: &str) -> Result<Vec<u8>, std::io::Error> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer: Vec<u8> = Vec::new();
    let _ = file.read_to_end(&mut buffer)?;

    Ok(buffer)
}

fn main() {
    tracing_subscriber::fmt::init();

    let opts = Opt::from_args();

    let buffer = match load_binary(opts.binary.as_str()) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    match disassemble(buffer.as_slice()) {
        Ok(program) => print!("{}", program),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

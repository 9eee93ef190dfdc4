/*!
disasm.rs - a minimal static disassembler front-end: reads a flat binary
image, loads it at a chosen origin, and prints one line per instruction
from `i8080::disassemble` until the image is exhausted.

This is the "disassembler's textual formatting" consumer the core
explicitly keeps out of scope (spec says mnemonic spelling is the host's
choice) - this demo is one opinionated choice among many, useful as a
worked example of driving `disassemble` without touching `Cpu8080` at all.
*/

use std::fs;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Disassemble a flat 8080 binary image", long_about = None)]
struct Cli {
    /// Path to the raw binary image to disassemble.
    image: PathBuf,

    /// Address the image is loaded at (hex, e.g. 0x0100).
    #[arg(long, value_parser = parse_hex_u16, default_value = "0x0000")]
    origin: u16,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u16::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    let bytes = match fs::read(&cli.image) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", cli.image.display());
            std::process::exit(1);
        }
    };

    let end = cli.origin as usize + bytes.len();
    let read = |addr: u16| {
        let offset = addr as usize;
        if offset >= cli.origin as usize && offset < end {
            bytes[offset - cli.origin as usize]
        } else {
            0
        }
    };

    let mut addr = cli.origin;
    let limit = cli.origin.saturating_add(bytes.len() as u16);
    while addr < limit {
        let (len, text) = i8080::disassemble(read, addr);
        println!("{addr:04x}  {text}");
        addr = addr.wrapping_add(len);
    }
}

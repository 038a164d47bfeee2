use std::fs;
use std::process::exit;

use anyhow::{Context, ensure};
use docopt::Docopt;
use serde_derive::Deserialize;

use bfenv::Env;

const USAGE: &str = "
Brainfuck to C translator

Translates the brainfuck program in <source> into a self-contained C
program written to <dest>, sized to a tape of <memsize> int cells.

Usage:
  bf2c <memsize> <source> <dest>
  bf2c (-h | --help)

Options:
  -h --help  Show this screen.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_memsize: String,
    arg_source: String,
    arg_dest: String,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(error) = run(&args) {
        eprintln!("{error:#}");
        exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let memsize: i64 = args
        .arg_memsize
        .parse()
        .with_context(|| format!("Invalid memory size: {}", args.arg_memsize))?;
    ensure!(
        memsize > 0,
        "Memory size must be a positive integer, got {memsize}"
    );

    // Translation assumes an int-celled tape.
    #[allow(clippy::cast_sign_loss)]
    let env = Env::<i32>::new(memsize as usize)?;

    eprintln!("Reading brainfuck source file ...");
    let source = fs::read_to_string(&args.arg_source)
        .with_context(|| format!("Could not read source file {}", args.arg_source))?;
    eprintln!("Source file size: {}.", source.len());

    eprintln!("Translating brainfuck code to C code ...");
    let translated = env.translate(&source)?;

    eprintln!("Writing into C destination file ...");
    fs::write(&args.arg_dest, &translated)
        .with_context(|| format!("Could not create destination file {}", args.arg_dest))?;

    eprintln!("Operation complete.");
    Ok(())
}

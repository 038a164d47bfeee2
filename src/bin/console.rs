use std::io::{self, BufRead, Write};
use std::process::exit;

use docopt::Docopt;
use serde_derive::Deserialize;

use bfenv::{Cell, Env};

const USAGE: &str = "
Brainfuck console

Lines are buffered until a blank line, then interpreted as one block of
brainfuck code against a persistent tape. Entering `reset` reinitializes
the tape and discards any buffered code.

Usage:
  console [--size=<cells>] [--width=<bits>] [--unsigned]
  console (-h | --help)

Options:
  -h --help        Show this screen.
  --size=<cells>   Number of cells on the tape [default: 1024].
  --width=<bits>   Cell width in bits: 8, 16, 32 or 64 [default: 32].
  --unsigned       Use unsigned cells.
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_size: usize,
    flag_width: u32,
    flag_unsigned: bool,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let result = match (args.flag_width, args.flag_unsigned) {
        (8, false) => repl::<i8>(args.flag_size),
        (8, true) => repl::<u8>(args.flag_size),
        (16, false) => repl::<i16>(args.flag_size),
        (16, true) => repl::<u16>(args.flag_size),
        (32, false) => repl::<i32>(args.flag_size),
        (32, true) => repl::<u32>(args.flag_size),
        (64, false) => repl::<i64>(args.flag_size),
        (64, true) => repl::<u64>(args.flag_size),
        (bits, _) => {
            eprintln!("Unsupported cell width: {bits} bits.");
            exit(1);
        }
    };

    if let Err(error) = result {
        eprintln!("{error:#}");
        exit(1);
    }
}

/// Line-buffering loop around one environment. Returns on end of input.
fn repl<T: Cell>(capacity: usize) -> anyhow::Result<()> {
    let mut env = Env::<T>::new(capacity)?;

    println!("== BRAINFUCK CONSOLE ==");
    println!("# Enter reset to reinitialize the brainfuck environment.");
    println!("# Other inputs will be interpreted as brainfuck code.");

    let stdin = io::stdin();
    let mut buffer = String::new();

    loop {
        print!("COMMAND ");
        io::stdout().flush()?;

        let mut line = String::new();
        let eof = stdin.lock().read_line(&mut line)? == 0;

        if !eof {
            let trimmed = line.trim_end_matches(['\r', '\n']);

            if trimmed == "reset" {
                env.reset();
                buffer.clear();
                println!("CONSOLE: Environment reset.");
                continue;
            }

            if !trimmed.is_empty() {
                buffer.push_str(&line);
                continue;
            }
        }

        if eof && buffer.is_empty() {
            return Ok(());
        }

        // Blank line or end of input: dispatch the buffered code. A failed
        // run prints its diagnostic inline; whatever was emitted before the
        // failure has already been printed.
        print!("OUTPUT: ");
        io::stdout().flush()?;
        if let Err(error) = env.interpret(&buffer) {
            print!("{error}");
        }
        println!();
        buffer.clear();

        if eof {
            return Ok(());
        }
    }
}

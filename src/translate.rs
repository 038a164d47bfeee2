use std::fmt::Write;

use crate::error::{Error, Result};
use crate::token::Token;

/// Rough per-instruction size of the emitted C text, used to preallocate
/// the output buffer.
const EXPANSION_FACTOR: usize = 32;

/// Lowers an instruction stream to a self-contained C program.
///
/// The translator has no runtime memory: it only emits code, and bounds
/// violations in the emitted program are that program's own affair. Loop
/// tracking is a plain nesting counter used for indentation; bracket
/// balance is judged from the counter's residue once the whole stream has
/// been consumed, not eagerly like the interpreter.
pub struct Translator {
    capacity: usize,
    cell_type: &'static str,
}

impl Translator {
    /// A translator targeting a tape of `capacity` cells declared with the
    /// C type `cell_type`.
    pub fn new(capacity: usize, cell_type: &'static str) -> Self {
        Translator {
            capacity,
            cell_type,
        }
    }

    /// Translate `source`, failing on unbalanced brackets.
    pub fn translate(&self, source: &str) -> Result<String> {
        let (code, residual) = self.emit(source);

        match residual {
            0 => Ok(code),
            depth if depth > 0 => Err(Error::MissingClose),
            _ => Err(Error::MissingOpen),
        }
    }

    /// Emit the full program and report the residual nesting depth.
    ///
    /// Zero residue means the brackets were balanced; the text is returned
    /// either way and is well-formed up to the point of imbalance.
    pub(crate) fn emit(&self, source: &str) -> (String, i32) {
        let code = source.as_bytes();
        let mut out = String::with_capacity(code.len() * EXPANSION_FACTOR + 256);
        let mut indent: i32 = 0;

        self.prologue(&mut out, &mut indent);

        let mut pos = 0;
        while pos < code.len() {
            match Token::from_byte(code[pos]) {
                Some(Token::MoveRight | Token::MoveLeft) => {
                    pos = movement_run(&mut out, indent, code, pos);
                }
                Some(Token::Incr | Token::Decr) => {
                    pos = arithmetic_run(&mut out, indent, code, pos);
                }
                Some(Token::Print) => {
                    push_indent(&mut out, indent);
                    out.push_str("printf(\"%c\", tape[i]);\n");
                    pos += 1;
                }
                Some(Token::Read) => {
                    push_indent(&mut out, indent);
                    out.push_str("tape[i] = getchar();\n");
                    pos += 1;
                }
                Some(Token::LoopStart) => {
                    push_indent(&mut out, indent);
                    out.push_str("while (tape[i] != 0) {\n");
                    indent += 1;
                    pos += 1;
                }
                Some(Token::LoopEnd) => {
                    indent -= 1;
                    push_indent(&mut out, indent);
                    out.push_str("}\n");
                    pos += 1;
                }
                // `:` is an interpreter-only extension with no place in the
                // language proper; translation skips it like a comment.
                Some(Token::PrintNum) | None => {
                    pos += 1;
                }
            }
        }

        self.epilogue(&mut out, &mut indent);

        (out, indent)
    }

    fn prologue(&self, out: &mut String, indent: &mut i32) {
        out.push_str("#include <stdio.h>\n");
        out.push_str("#include <stdlib.h>\n");
        out.push_str("#include <stddef.h>\n");
        out.push('\n');
        out.push_str("int main() {\n");
        *indent += 1;
        push_indent(out, *indent);
        out.push('\n');
        push_indent(out, *indent);
        let _ = writeln!(
            out,
            "{ty} *tape = ({ty} *)calloc({cap}, sizeof({ty}));",
            ty = self.cell_type,
            cap = self.capacity,
        );
        push_indent(out, *indent);
        out.push_str("ptrdiff_t i = 0;\n");
        out.push('\n');
    }

    fn epilogue(&self, out: &mut String, indent: &mut i32) {
        push_indent(out, *indent);
        out.push('\n');
        push_indent(out, *indent);
        out.push_str("free(tape);\n");
        push_indent(out, *indent);
        // Wait for a keypress so a double-clicked program doesn't vanish.
        out.push_str("getchar();\n");
        push_indent(out, *indent);
        out.push('\n');
        push_indent(out, *indent);
        out.push_str("return 0;\n");
        push_indent(out, *indent);
        out.push('\n');
        *indent -= 1;
        push_indent(out, *indent);
        out.push_str("}\n");
    }
}

/// Collate a run of `>`/`<` into one cursor adjustment. Returns the
/// position just past the run.
fn movement_run(out: &mut String, indent: i32, code: &[u8], start: usize) -> usize {
    let mut offset: i64 = 0;
    let mut pos = start;

    while pos < code.len() {
        match code[pos] {
            b'>' => offset += 1,
            b'<' => offset -= 1,
            _ => break,
        }
        pos += 1;
    }

    push_indent(out, indent);
    match offset {
        0 => {}
        1 => out.push_str("i++;"),
        -1 => out.push_str("i--;"),
        n if n > 0 => {
            let _ = write!(out, "i += {n};");
        }
        n => {
            let _ = write!(out, "i -= {};", -n);
        }
    }

    // Movement is usually followed by arithmetic on the destination cell;
    // keeping such a pair on one line reads better.
    if pos < code.len() && matches!(code[pos], b'+' | b'-') {
        out.push(' ');
    } else {
        out.push('\n');
    }

    pos
}

/// Collate a run of `+`/`-` into one cell mutation. Returns the position
/// just past the run.
fn arithmetic_run(out: &mut String, indent: i32, code: &[u8], start: usize) -> usize {
    let mut delta: i64 = 0;
    let mut pos = start;

    while pos < code.len() {
        match code[pos] {
            b'+' => delta += 1,
            b'-' => delta -= 1,
            _ => break,
        }
        pos += 1;
    }

    // When a movement statement ended just before this run the two share a
    // line and the indentation was already written.
    if start == 0 || !matches!(code[start - 1], b'>' | b'<') {
        push_indent(out, indent);
    }

    match delta {
        0 => {}
        1 => out.push_str("tape[i]++;\n"),
        -1 => out.push_str("tape[i]--;\n"),
        n if n > 0 => {
            let _ = writeln!(out, "tape[i] += {n};");
        }
        n => {
            let _ = writeln!(out, "tape[i] -= {};", -n);
        }
    }

    pos
}

fn push_indent(out: &mut String, indent: i32) {
    for _ in 0..indent.max(0) {
        out.push('\t');
    }
}

use std::io::{self, Read, Write};

use crate::cell::Cell;
use crate::error::{AccessKind, Error, Result};
use crate::matcher;
use crate::tape::Tape;
use crate::token::Token;
use crate::translate::Translator;

/// A brainfuck environment: one tape plus the streams the `,`, `.` and `:`
/// instructions talk to.
///
/// Tape contents and cursor position persist across `interpret` calls;
/// only [`Env::reset`] clears them.
pub struct Env<T: Cell> {
    tape: Tape<T>,
    /// Reader used by the `,` instruction.
    input: Box<dyn Read>,
    /// Writer used by the `.` and `:` instructions.
    output: Box<dyn Write>,
}

impl<T: Cell> Env<T> {
    /// An environment with `capacity` zeroed cells, wired to stdin/stdout.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_io(capacity, Box::new(io::stdin()), Box::new(io::stdout()))
    }

    /// An environment with caller-supplied streams. Any source that returns
    /// exactly one byte per `,` (or fails) satisfies the input contract.
    pub fn with_io(capacity: usize, input: Box<dyn Read>, output: Box<dyn Write>) -> Result<Self> {
        Ok(Env {
            tape: Tape::new(capacity)?,
            input,
            output,
        })
    }

    pub fn capacity(&self) -> usize {
        self.tape.capacity()
    }

    /// Execute `source` against the live tape.
    ///
    /// Halts on the first access violation or unmatched bracket. Output
    /// emitted before the failure stays emitted; nothing is rolled back.
    pub fn interpret(&mut self, source: &str) -> Result<()> {
        let code = source.as_bytes();
        let mut pc = 0;

        while pc < code.len() {
            let Some(token) = Token::from_byte(code[pc]) else {
                // Comment byte.
                pc += 1;
                continue;
            };

            match token {
                Token::MoveRight => {
                    self.tape.move_by(1);
                    pc += 1;
                }
                Token::MoveLeft => {
                    self.tape.move_by(-1);
                    pc += 1;
                }
                Token::Incr => {
                    self.check_bounds(AccessKind::Write)?;
                    let value = self.tape.read().wrapping_incr();
                    self.tape.write(value);
                    pc += 1;
                }
                Token::Decr => {
                    self.check_bounds(AccessKind::Write)?;
                    let value = self.tape.read().wrapping_decr();
                    self.tape.write(value);
                    pc += 1;
                }
                Token::Print => {
                    self.check_bounds(AccessKind::Read)?;
                    self.output.write_all(&[self.tape.read().to_output_byte()])?;
                    self.output.flush()?;
                    pc += 1;
                }
                Token::PrintNum => {
                    self.check_bounds(AccessKind::Read)?;
                    write!(self.output, "{}", self.tape.read())?;
                    self.output.flush()?;
                    pc += 1;
                }
                Token::Read => {
                    self.check_bounds(AccessKind::Write)?;
                    let mut buf = [0u8; 1];
                    self.input.read_exact(&mut buf)?;
                    self.tape.write(T::from_input_byte(buf[0]));
                    pc += 1;
                }
                Token::LoopStart => {
                    // The cell is read to decide the skip, so bounds matter
                    // here too. The match is located before that decision:
                    // an unenclosed loop fails even when its body would run.
                    self.check_bounds(AccessKind::Read)?;
                    let close = matcher::find_forward_match(code, pc)?;

                    if self.tape.read().is_zero() {
                        pc = close + 1;
                    } else {
                        pc += 1;
                    }
                }
                Token::LoopEnd => {
                    // Jump back onto the `[` itself; the next step re-reads
                    // the cell and decides the loop again.
                    pc = matcher::find_backward_match(code, pc)?;
                }
            }
        }

        Ok(())
    }

    /// Lower `source` to a C program sized to this environment's tape.
    ///
    /// Never touches the tape; a failed translation leaves the
    /// environment's state untouched as well.
    pub fn translate(&self, source: &str) -> Result<String> {
        Translator::new(self.tape.capacity(), T::C_TYPE).translate(source)
    }

    /// Zero the tape and return the cursor to the first cell. Idempotent,
    /// emits nothing.
    pub fn reset(&mut self) {
        self.tape.reset();
    }

    fn check_bounds(&self, intent: AccessKind) -> Result<()> {
        if self.tape.in_bounds() {
            Ok(())
        } else {
            Err(Error::AccessViolation(intent))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::shared_buffer::SharedBuffer;

    fn env_with_output<T: Cell>(capacity: usize) -> (Env<T>, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let env = Env::with_io(capacity, Box::new(io::empty()), Box::new(buffer.clone()))
            .expect("capacity is positive");

        (env, buffer)
    }

    #[test]
    fn prints_cell_as_decimal() {
        let (mut env, output) = env_with_output::<i32>(8);

        env.interpret("++++:").unwrap();

        assert_eq!(output.string(), "4");
    }

    #[test]
    fn prints_cell_as_character() {
        let (mut env, output) = env_with_output::<u8>(8);

        env.interpret("++++.").unwrap();

        assert_eq!(output.bytes(), vec![4]);
    }

    #[test]
    fn loops_run_until_cell_is_zero() {
        let (mut env, output) = env_with_output::<u8>(8);

        // 8 * 8 + 1 = 65 = 'A'
        env.interpret("++++++++[>++++++++<-]>+.").unwrap();

        assert_eq!(output.string(), "A");
    }

    #[test]
    fn comment_bytes_are_skipped() {
        let (mut env, output) = env_with_output::<u8>(8);

        env.interpret("two plus two; + + + + :").unwrap();

        assert_eq!(output.string(), "4");
    }

    #[test]
    fn unmatched_open_halts_with_no_further_output() {
        let (mut env, output) = env_with_output::<u8>(8);

        let result = env.interpret("+.[+.");

        assert!(matches!(result, Err(Error::MissingClose)));
        // Only the print before the bad bracket made it out.
        assert_eq!(output.bytes(), vec![1]);
    }

    #[test]
    fn unmatched_close_halts() {
        let (mut env, _output) = env_with_output::<u8>(8);

        assert!(matches!(env.interpret("+]"), Err(Error::MissingOpen)));
    }

    #[test]
    fn unmatched_open_fails_even_when_the_loop_would_run() {
        let (mut env, _output) = env_with_output::<u8>(8);

        // The cell is nonzero, but the match is located before the skip
        // decision, so the missing bracket is still caught.
        assert!(matches!(env.interpret("+[+"), Err(Error::MissingClose)));
    }

    #[test]
    fn write_past_the_last_cell_is_an_access_violation() {
        let (mut env, _output) = env_with_output::<u8>(4);

        let result = env.interpret(">>>>+");

        assert!(matches!(
            result,
            Err(Error::AccessViolation(AccessKind::Write))
        ));
    }

    #[test]
    fn read_before_the_first_cell_is_an_access_violation() {
        let (mut env, _output) = env_with_output::<u8>(4);

        let result = env.interpret("<.");

        assert!(matches!(
            result,
            Err(Error::AccessViolation(AccessKind::Read))
        ));
    }

    #[test]
    fn movement_alone_never_fails() {
        let (mut env, _output) = env_with_output::<u8>(4);

        // Out of range and back; no cell is touched while outside.
        env.interpret(">>>>>><<<<<<").unwrap();
    }

    #[test]
    fn state_persists_across_interpret_calls() {
        let (mut env, output) = env_with_output::<i32>(8);

        env.interpret("+++").unwrap();
        env.interpret(":").unwrap();

        assert_eq!(output.string(), "3");
    }

    #[test]
    fn reset_clears_tape_and_cursor() {
        let (mut env, output) = env_with_output::<i32>(8);

        env.interpret(">>+++").unwrap();
        env.reset();
        env.interpret(":").unwrap();

        assert_eq!(output.string(), "0");
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let (mut env, output) = env_with_output::<i32>(8);

        env.interpret("+++").unwrap();
        env.reset();
        env.reset();
        env.interpret(":").unwrap();

        assert_eq!(output.string(), "0");
    }

    #[test]
    fn unsigned_cells_wrap_below_zero() {
        let (mut env, output) = env_with_output::<u8>(8);

        env.interpret("-:").unwrap();

        assert_eq!(output.string(), "255");
    }

    #[test]
    fn signed_cells_go_negative() {
        let (mut env, output) = env_with_output::<i32>(8);

        env.interpret("--:").unwrap();

        assert_eq!(output.string(), "-2");
    }

    #[test]
    fn reads_one_input_byte_into_the_cell() {
        let buffer = SharedBuffer::new();
        let mut env = Env::<u8>::with_io(
            8,
            Box::new(Cursor::new(b"X".to_vec())),
            Box::new(buffer.clone()),
        )
        .unwrap();

        env.interpret(",.").unwrap();

        assert_eq!(buffer.string(), "X");
    }

    #[test]
    fn read_at_end_of_input_is_an_io_error() {
        let (mut env, _output) = env_with_output::<u8>(8);

        assert!(matches!(env.interpret(","), Err(Error::Io(_))));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(matches!(Env::<u8>::new(0), Err(Error::ZeroCapacity)));
    }
}

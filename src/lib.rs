//! A brainfuck environment with two engines over the same instruction
//! stream: a bounds-checked interpreter and a brainfuck-to-C translator.
//!
//! An [`Env`] owns a fixed-capacity tape of integral cells plus the I/O
//! streams its instructions talk to. Tape state persists across
//! [`Env::interpret`] calls until [`Env::reset`] is called. The cell width
//! is picked at construction through the [`Cell`] trait, implemented for
//! the eight fixed-width integer types.
//!
//! On top of the eight standard instructions the interpreter accepts `:`,
//! which prints the current cell as a decimal number instead of a
//! character. `:` is not part of the language proper and the translator
//! skips it like a comment.

mod cell;
mod env;
mod error;
mod matcher;
mod tape;
mod token;
mod translate;

#[cfg(test)]
mod shared_buffer;

pub use self::cell::Cell;
pub use self::env::Env;
pub use self::error::{AccessKind, Error, Result};
pub use self::tape::Tape;
pub use self::token::Token;
pub use self::translate::Translator;

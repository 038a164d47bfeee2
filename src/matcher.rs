//! Structural bracket matching.
//!
//! Matches are located with a fresh scan every time the interpreter crosses
//! a loop boundary. There is no precomputed jump table; the rescan keeps
//! the error timing of unmatched brackets identical to a plain walk.

use crate::error::{Error, Result};

/// Locate the `]` matching the `[` at `open`.
///
/// Scans forward from just after `open` with a depth counter starting at 1.
/// Running off the end of the stream first means the loop is unenclosed.
pub fn find_forward_match(code: &[u8], open: usize) -> Result<usize> {
    let mut depth = 1u32;

    for (index, &byte) in code.iter().enumerate().skip(open + 1) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }

    Err(Error::MissingClose)
}

/// Locate the `[` matching the `]` at `close`.
///
/// Symmetric to [`find_forward_match`], scanning backward from just before
/// `close`.
pub fn find_backward_match(code: &[u8], close: usize) -> Result<usize> {
    let mut depth = 1u32;

    for index in (0..close).rev() {
        match code[index] {
            b']' => depth += 1,
            b'[' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }

    Err(Error::MissingOpen)
}

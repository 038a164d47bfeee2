/// One recognized instruction symbol.
///
/// Both engines dispatch over this enum. `PrintNum` (`:`) is an
/// interpreter-only extension; the translator carries an explicit skip arm
/// for it so the dialect difference stays visible in the match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// `>` shift the cursor right.
    MoveRight,
    /// `<` shift the cursor left.
    MoveLeft,
    /// `+` increment the current cell.
    Incr,
    /// `-` decrement the current cell.
    Decr,
    /// `.` emit the current cell as a character.
    Print,
    /// `:` emit the current cell as a decimal number.
    PrintNum,
    /// `,` read one input unit into the current cell.
    Read,
    /// `[` enter a loop, or skip past its `]` when the current cell is zero.
    LoopStart,
    /// `]` jump back to the matching `[`.
    LoopEnd,
}

impl Token {
    /// Classify a source byte. Anything unrecognized is a comment.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'>' => Some(Token::MoveRight),
            b'<' => Some(Token::MoveLeft),
            b'+' => Some(Token::Incr),
            b'-' => Some(Token::Decr),
            b'.' => Some(Token::Print),
            b':' => Some(Token::PrintNum),
            b',' => Some(Token::Read),
            b'[' => Some(Token::LoopStart),
            b']' => Some(Token::LoopEnd),
            _ => None,
        }
    }
}

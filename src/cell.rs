use std::fmt;

/// One addressable storage unit on the tape.
///
/// Implemented for the eight fixed-width integer types. Increment and
/// decrement wrap at the type's natural boundary; the language relies on
/// that overflow and it must not be guarded against.
pub trait Cell: Copy + Default + fmt::Display + 'static {
    /// Type name used to declare tape storage in translated C code.
    const C_TYPE: &'static str;

    fn wrapping_incr(self) -> Self;

    fn wrapping_decr(self) -> Self;

    /// Store one unit of input, as consumed by the `,` instruction.
    fn from_input_byte(byte: u8) -> Self;

    /// The low byte of the cell, as emitted by the `.` instruction.
    fn to_output_byte(self) -> u8;

    fn is_zero(self) -> bool;
}

macro_rules! impl_cell {
    ($($ty:ty => $c_type:expr),+ $(,)?) => {
        $(
            impl Cell for $ty {
                const C_TYPE: &'static str = $c_type;

                fn wrapping_incr(self) -> Self {
                    self.wrapping_add(1)
                }

                fn wrapping_decr(self) -> Self {
                    self.wrapping_sub(1)
                }

                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
                fn from_input_byte(byte: u8) -> Self {
                    byte as $ty
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn to_output_byte(self) -> u8 {
                    self as u8
                }

                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )+
    };
}

impl_cell! {
    i8 => "char",
    u8 => "unsigned char",
    i16 => "short",
    u16 => "unsigned short",
    i32 => "int",
    u32 => "unsigned",
    i64 => "long long",
    u64 => "unsigned long long",
}

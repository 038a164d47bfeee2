use crate::cell::Cell;
use crate::error::{Error, Result};

/// Fixed-capacity, zero-initialized tape with a movable cursor.
///
/// The cursor is deliberately unclamped: movement may leave the valid range
/// and only the next read or write notices. Callers must check `in_bounds`
/// before touching a cell.
pub struct Tape<T: Cell> {
    cells: Vec<T>,
    cursor: isize,
}

impl<T: Cell> Tape<T> {
    /// A tape of `capacity` zeroed cells with the cursor on the first one.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Tape {
            cells: vec![T::default(); capacity],
            cursor: 0,
        })
    }

    /// Cell count. Immutable after construction.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Shift the cursor by `delta` cells. Never fails, never clamps.
    pub fn move_by(&mut self, delta: isize) {
        self.cursor += delta;
    }

    pub fn in_bounds(&self) -> bool {
        usize::try_from(self.cursor).is_ok_and(|index| index < self.cells.len())
    }

    /// Current cell value. The cursor must be in bounds.
    pub fn read(&self) -> T {
        debug_assert!(self.in_bounds());

        #[allow(clippy::cast_sign_loss)]
        let index = self.cursor as usize;
        self.cells[index]
    }

    /// Overwrite the current cell. The cursor must be in bounds.
    pub fn write(&mut self, value: T) {
        debug_assert!(self.in_bounds());

        #[allow(clippy::cast_sign_loss)]
        let index = self.cursor as usize;
        self.cells[index] = value;
    }

    /// Zero every cell and return the cursor to the first address.
    pub fn reset(&mut self) {
        self.cells.fill(T::default());
        self.cursor = 0;
    }
}

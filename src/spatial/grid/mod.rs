//! Grid - flat row-major cell storage
//!
//! One byte per cell (0 = dead, 1 = alive) so the buffer can be handed to JS
//! as a `Uint8Array` view without conversion.
//!
//! Sparse bookkeeping: a live count per row lets `tick` skip rows whose
//! whole neighborhood is empty.

use crate::error::GridError;

mod indexing;
mod accessors;
mod neighbors;
mod sparse;
mod display;

pub use neighbors::MOORE_OFFSETS;

pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    pub(crate) cells: Vec<u8>,   // 0 = dead, 1 = alive
    row_live: Vec<u32>,          // live cells per row (empty when size == 0)
}

impl Grid {
    /// Allocate an all-dead grid. `rows * cols` saturates; an absurd request
    /// fails in the allocator exactly as an oversized `Vec` would.
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = (rows as usize).saturating_mul(cols as usize);
        let tracked_rows = if size == 0 { 0 } else { rows as usize };
        Self {
            rows,
            cols,
            size,
            cells: vec![0; size],
            row_live: vec![0; tracked_rows],
        }
    }

    /// Like `new`, but reports dimensions whose cell count overflows instead
    /// of attempting the allocation.
    pub fn try_new(rows: u32, cols: u32) -> Result<Self, GridError> {
        match (rows as usize).checked_mul(cols as usize) {
            Some(size) if size <= isize::MAX as usize => Ok(Self::new(rows, cols)),
            _ => Err(GridError::TooLarge { rows, cols }),
        }
    }
}

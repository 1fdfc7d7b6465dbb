use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) { (self.rows, self.cols) }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion (row-major) ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((idx / cols) as u32, (idx % cols) as u32)
    }

    // === Bounds checking ===
    /// Signed 64-bit so neighbor offsets and `i32` caller input never overflow.
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.rows as i64 && col >= 0 && col < self.cols as i64
    }

    /// Index of `(row, col)` or `OutOfBounds`.
    #[inline]
    pub fn checked_index(&self, row: i64, col: i64) -> Result<usize, GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row as u32, col as u32))
    }

    /// Get index without bounds check
    #[inline(always)]
    pub fn index_unchecked(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index_unchecked: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }
}

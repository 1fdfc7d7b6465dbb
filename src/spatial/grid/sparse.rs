use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    #[inline]
    pub(super) fn mark_cell_alive(&mut self, row: u32) {
        let r = row as usize;
        self.row_live[r] = self.row_live[r].saturating_add(1);
    }

    #[inline]
    pub(super) fn mark_cell_dead(&mut self, row: u32) {
        let r = row as usize;
        if self.row_live[r] > 0 {
            self.row_live[r] -= 1;
        }
    }

    #[inline]
    pub fn row_live(&self, row: u32) -> u32 {
        self.row_live.get(row as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn row_has_data(&self, row: u32) -> bool {
        self.row_live(row) > 0
    }

    /// True when `row` and both adjacent rows hold no live cell, so the next
    /// generation of `row` is all dead.
    #[inline]
    pub fn neighborhood_empty(&self, row: u32) -> bool {
        let above = row.checked_sub(1).map_or(0, |r| self.row_live(r));
        let below = row.checked_add(1).map_or(0, |r| self.row_live(r));
        above == 0 && self.row_live(row) == 0 && below == 0
    }

    /// Live cells on the whole grid.
    pub fn population(&self) -> u64 {
        self.row_live.iter().map(|&n| n as u64).sum()
    }

    /// Rebuild row counts from the authoritative cell buffer.
    /// Parallel row scanning with Rayon when feature enabled
    pub fn refresh_row_counts(&mut self) {
        if self.size == 0 {
            return;
        }
        let cols = self.cols as usize;

        #[cfg(feature = "parallel")]
        {
            self.row_live
                .par_iter_mut()
                .zip(self.cells.par_chunks(cols))
                .for_each(|(count, row)| *count = row.iter().map(|&c| c as u32).sum());
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (count, row) in self.row_live.iter_mut().zip(self.cells.chunks(cols)) {
                *count = row.iter().map(|&c| c as u32).sum();
            }
        }
    }
}

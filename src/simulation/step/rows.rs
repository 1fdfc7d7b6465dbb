//! Per-row next-generation computation.
//!
//! Every row reads only the current grid and writes only its own slice of the
//! scratch buffer, so rows are independent and fan out over Rayon when the
//! `parallel` feature is on.

use crate::grid::Grid;
use crate::rules::next_state;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RowDelta {
    pub(crate) births: u32,
    pub(crate) deaths: u32,
    pub(crate) rows_processed: u32,
    pub(crate) rows_skipped: u32,
}

impl RowDelta {
    #[inline]
    pub(crate) fn merge(self, other: RowDelta) -> RowDelta {
        RowDelta {
            births: self.births + other.births,
            deaths: self.deaths + other.deaths,
            rows_processed: self.rows_processed + other.rows_processed,
            rows_skipped: self.rows_skipped + other.rows_skipped,
        }
    }

    #[inline]
    pub(crate) fn changed(&self) -> bool {
        self.births > 0 || self.deaths > 0
    }
}

/// Write the next generation of `row` into `out` (length = cols).
pub(crate) fn compute_row(grid: &Grid, row: u32, out: &mut [u8]) -> RowDelta {
    // Nothing alive within reach: the row stays dead
    if grid.neighborhood_empty(row) {
        out.fill(0);
        return RowDelta { rows_skipped: 1, ..RowDelta::default() };
    }

    let mut delta = RowDelta { rows_processed: 1, ..RowDelta::default() };
    for (col, slot) in out.iter_mut().enumerate() {
        let col = col as u32;
        let alive = grid.is_alive(row, col);
        let next = next_state(alive, grid.neighbor_count(row, col));
        match (alive, next) {
            (false, true) => delta.births += 1,
            (true, false) => delta.deaths += 1,
            _ => {}
        }
        *slot = next as u8;
    }
    delta
}

/// Fill `next` (same size as the grid) with the following generation.
pub(crate) fn compute_next(grid: &Grid, next: &mut [u8]) -> RowDelta {
    if grid.size() == 0 {
        return RowDelta::default();
    }
    let cols = grid.cols() as usize;

    #[cfg(feature = "parallel")]
    let delta = next
        .par_chunks_mut(cols)
        .enumerate()
        .map(|(row, out)| compute_row(grid, row as u32, out))
        .reduce(RowDelta::default, RowDelta::merge);

    #[cfg(not(feature = "parallel"))]
    let delta = next
        .chunks_mut(cols)
        .enumerate()
        .map(|(row, out)| compute_row(grid, row as u32, out))
        .fold(RowDelta::default(), RowDelta::merge);

    delta
}

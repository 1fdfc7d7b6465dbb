use super::*;

/// Moore neighborhood as (row, col) deltas.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl Grid {
    /// Live cells among the up-to-8 neighbors of `(row, col)`.
    /// Positions off the grid are skipped, never wrapped.
    #[inline]
    pub fn neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0u8;
        for &(dr, dc) in &MOORE_OFFSETS {
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if self.in_bounds(nr, nc) {
                count += *fast!(self.cells, [self.index_unchecked(nr as u32, nc as u32)]);
            }
        }
        count
    }
}

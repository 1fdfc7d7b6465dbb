use super::super::*;
use crate::domain::cell::CellState;

impl Grid {
    // === Cell access ===
    #[inline]
    pub fn state_at(&self, idx: usize) -> CellState {
        CellState::from_raw(self.cells[idx])
    }

    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.cells[self.index(row, col)] == 1
    }

    /// Write one cell, keeping row counts in sync. Returns true if it changed.
    pub fn set_idx(&mut self, idx: usize, state: CellState) -> bool {
        let prev = self.cells[idx];
        let next = state.raw();
        if prev == next {
            return false;
        }
        self.cells[idx] = next;
        let (row, _) = self.coords(idx);
        if next == 1 {
            self.mark_cell_alive(row);
        } else {
            self.mark_cell_dead(row);
        }
        true
    }

    /// Flip one cell and return its new state.
    pub fn flip_idx(&mut self, idx: usize) -> CellState {
        let next = self.state_at(idx).flipped();
        self.set_idx(idx, next);
        next
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.row_live.fill(0);
    }

    /// Swap in a fully computed generation. `next` receives the old one.
    pub fn replace_cells(&mut self, next: &mut Vec<u8>) {
        debug_assert_eq!(next.len(), self.size, "replace_cells: buffer size mismatch");
        std::mem::swap(&mut self.cells, next);
        self.refresh_row_counts();
    }
}

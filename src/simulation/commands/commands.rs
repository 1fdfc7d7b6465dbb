use crate::domain::cell::CellState;
use crate::domain::patterns::Pattern;
use crate::error::GridError;

use super::LifeCore;

/// Any edit outside `tick` breaks the generation chain the cycle window
/// was built from.
fn forget_history(core: &mut LifeCore) {
    core.history.clear();
    core.cycle_period = None;
}

pub(super) fn toggle(core: &mut LifeCore, row: i64, col: i64) -> Result<CellState, GridError> {
    let idx = core.grid.checked_index(row, col)?;
    let state = core.grid.flip_idx(idx);
    forget_history(core);
    Ok(state)
}

pub(super) fn current_state(core: &LifeCore, row: i64, col: i64) -> Result<CellState, GridError> {
    let idx = core.grid.checked_index(row, col)?;
    Ok(core.grid.state_at(idx))
}

pub(super) fn set_cell(core: &mut LifeCore, row: i64, col: i64, state: CellState) -> Result<bool, GridError> {
    let idx = core.grid.checked_index(row, col)?;
    let changed = core.grid.set_idx(idx, state);
    if changed {
        forget_history(core);
    }
    Ok(changed)
}

pub(super) fn reset(core: &mut LifeCore) {
    core.grid.clear();
    core.generation = 0;
    core.last_births = 0;
    core.last_deaths = 0;
    forget_history(core);
    log::debug!("grid reset ({}x{})", core.rows(), core.cols());
}

pub(super) fn apply_pattern(
    core: &mut LifeCore,
    pattern: &Pattern,
    row: u32,
    col: u32,
    clear_first: bool,
) -> usize {
    if clear_first {
        reset(core);
    }

    let (rows, cols) = core.grid.dimensions();
    let mut placed = 0;
    for (r, c) in pattern.cells_at(row, col) {
        if r < rows as u64 && c < cols as u64 {
            let idx = core.grid.index(r as u32, c as u32);
            core.grid.set_idx(idx, CellState::Alive);
            placed += 1;
        }
    }
    forget_history(core);

    if placed < pattern.cells.len() {
        log::warn!(
            "pattern {} at ({}, {}) clipped: {} of {} cells outside the {}x{} grid",
            pattern.name,
            row,
            col,
            pattern.cells.len() - placed,
            pattern.cells.len(),
            rows,
            cols
        );
    }
    placed
}

//! Cell states and the tick-change signal.
//!
//! Storage keeps cells as raw `u8` (0 = dead, 1 = alive) so the buffer can be
//! handed to JS as-is; these enums are the typed view on top of it.

use serde::{Deserialize, Serialize};

pub const CELL_DEAD: i8 = 0;
pub const CELL_ALIVE: i8 = 1;
/// Returned by the JS facade for out-of-bounds cell access.
pub const CELL_INVALID: i8 = -1;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn from_raw(raw: u8) -> Self {
        if raw == 0 { CellState::Dead } else { CellState::Alive }
    }

    #[inline]
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Numeric code used across the JS boundary (0 / 1).
    #[inline]
    pub fn code(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Whether the last tick changed the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpdateState {
    /// No tick since construction.
    #[default]
    NeverTicked,
    /// Last tick produced an identical generation.
    Unchanged,
    /// Last tick flipped at least one cell.
    Changed,
}

impl UpdateState {
    /// -1 never ticked, 0 unchanged, 1 changed.
    #[inline]
    pub fn code(self) -> i8 {
        match self {
            UpdateState::NeverTicked => -1,
            UpdateState::Unchanged => 0,
            UpdateState::Changed => 1,
        }
    }

    #[inline]
    pub fn from_changed(changed: bool) -> Self {
        if changed { UpdateState::Changed } else { UpdateState::Unchanged }
    }
}

//! LifeCore - the Game of Life engine
//!
//! Orchestration only: storage and neighbor counting live in `spatial::grid`,
//! the B3/S23 rule in `domain::rules`.
//!
//! Tick model: the next generation is computed into a second buffer from the
//! current one, then swapped in whole (`std::mem::swap`). Nothing can observe
//! a half-applied generation because `tick` holds `&mut self` throughout.

use crate::domain::cell::{CellState, UpdateState};
use crate::domain::config::LifeConfig;
use crate::domain::patterns::Pattern;
use crate::error::{ConfigError, GridError};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/rows.rs"]
mod rows;
#[path = "step/tick.rs"]
mod tick;
#[path = "commands/commands.rs"]
mod commands;
#[path = "history/cycle.rs"]
mod cycle;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Life;
pub use perf_stats::PerfStats;

use cycle::CycleDetector;
use perf_timer::PerfTimer;

/// The simulation engine
pub struct LifeCore {
    grid: Grid,
    next: Vec<u8>,  // scratch generation, same size as grid

    // State
    update_state: UpdateState,
    generation: u64,
    last_births: u32,
    last_deaths: u32,

    // Cycle detection
    history: CycleDetector,
    cycle_period: Option<usize>,

    // Settings
    tick_interval_ms: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LifeCore {
    /// Create an all-dead grid. Negative dimensions are sign-flipped, never
    /// rejected; use [`LifeCore::try_new`] to reject them instead.
    pub fn new(rows: i32, cols: i32) -> Self {
        init::create_life_core(rows, cols)
    }

    /// Strict constructor: negative or overflowing dimensions are errors.
    pub fn try_new(rows: i32, cols: i32) -> Result<Self, GridError> {
        init::try_create_life_core(rows, cols)
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        init::create_life_core_from_config(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = LifeConfig::from_json(json)?;
        Self::from_config(&config)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn dimensions(&self) -> (u32, u32) { self.grid.dimensions() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> u64 { self.grid.population() }

    /// Cells born on the last tick
    pub fn last_births(&self) -> u32 { self.last_births }

    /// Cells that died on the last tick
    pub fn last_deaths(&self) -> u32 { self.last_deaths }

    // === CELL API ===

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, row: i32, col: i32) -> Result<CellState, GridError> {
        commands::toggle(self, row as i64, col as i64)
    }

    pub fn current_state(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        commands::current_state(self, row as i64, col as i64)
    }

    /// Paint a cell; returns whether it changed
    pub fn set_cell(&mut self, row: i32, col: i32, state: CellState) -> Result<bool, GridError> {
        commands::set_cell(self, row as i64, col as i64, state)
    }

    /// Kill every cell. Dimensions and `updated()` are left as they are.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Stamp a pattern with its top-left corner at `(row, col)`.
    /// Returns the number of cells placed; the rest were clipped.
    pub fn apply_pattern(&mut self, pattern: &Pattern, row: u32, col: u32, clear_first: bool) -> usize {
        commands::apply_pattern(self, pattern, row, col, clear_first)
    }

    // === SIMULATION ===

    /// Advance one generation
    pub fn tick(&mut self) {
        tick::tick(self);
    }

    /// Advance `n` generations, stopping early once the grid is stable.
    /// Returns the number of ticks actually run.
    pub fn run(&mut self, n: u32) -> u32 {
        tick::run(self, n)
    }

    pub fn updated(&self) -> UpdateState {
        self.update_state
    }

    /// True unless the last tick changed something. A host auto-play loop
    /// stops on this.
    pub fn is_halted(&self) -> bool {
        self.update_state != UpdateState::Changed
    }

    /// Period of the repeat found after the last tick (1 = still life),
    /// `None` if no earlier generation in the history window matches.
    pub fn cycle_period(&self) -> Option<usize> {
        self.cycle_period
    }

    // === SETTINGS ===

    pub fn tick_interval_ms(&self) -> u32 {
        settings::tick_interval_ms(self)
    }

    pub fn set_tick_interval_ms(&mut self, ms: u32) -> Result<(), ConfigError> {
        settings::set_tick_interval_ms(self, ms)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === RENDER ACCESS ===

    /// Get pointer to the cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Crate-internal access for tests
impl LifeCore {
    #[allow(dead_code)]
    pub(crate) fn neighbor_count(&self, row: u32, col: u32) -> u8 {
        self.grid.neighbor_count(row, col)
    }
}

use crate::domain::config::LifeConfig;
use crate::error::{ConfigError, GridError};
use crate::grid::Grid;

use super::cycle::CycleDetector;
use super::perf_stats::PerfStats;
use super::LifeCore;

fn assemble(grid: Grid, config: &LifeConfig) -> LifeCore {
    log::info!("created {}x{} life grid", grid.rows(), grid.cols());
    let next = vec![0u8; grid.size()];
    LifeCore {
        grid,
        next,
        update_state: Default::default(),
        generation: 0,
        last_births: 0,
        last_deaths: 0,
        history: CycleDetector::new(config.cycle_history),
        cycle_period: None,
        tick_interval_ms: config.tick_interval_ms,
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn create_life_core(rows: i32, cols: i32) -> LifeCore {
    let (abs_rows, abs_cols) = (rows.unsigned_abs(), cols.unsigned_abs());
    if rows < 0 || cols < 0 {
        log::warn!("negative dimensions {}x{} coerced to {}x{}", rows, cols, abs_rows, abs_cols);
    }
    assemble(Grid::new(abs_rows, abs_cols), &LifeConfig::default())
}

pub(super) fn try_create_life_core(rows: i32, cols: i32) -> Result<LifeCore, GridError> {
    if rows < 0 || cols < 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    let grid = Grid::try_new(rows as u32, cols as u32)?;
    Ok(assemble(grid, &LifeConfig::default()))
}

pub(super) fn create_life_core_from_config(config: &LifeConfig) -> Result<LifeCore, ConfigError> {
    config.validate()?;
    let grid = Grid::try_new(config.rows.unsigned_abs(), config.cols.unsigned_abs())?;
    Ok(assemble(grid, config))
}

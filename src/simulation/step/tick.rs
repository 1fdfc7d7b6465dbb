use crate::domain::cell::UpdateState;

use super::cycle::hash_cells;
use super::rows::compute_next;
use super::{LifeCore, PerfTimer};

pub(super) fn tick(core: &mut LifeCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Seed the window with the generation we are leaving
    if core.history.is_empty() {
        core.history.record(hash_cells(core.grid.cells()));
    }

    // Next generation from the current one only, then swap it in whole
    let delta = compute_next(&core.grid, &mut core.next);
    core.grid.replace_cells(&mut core.next);

    core.generation += 1;
    core.last_births = delta.births;
    core.last_deaths = delta.deaths;
    core.update_state = UpdateState::from_changed(delta.changed());
    core.cycle_period = core.history.observe(hash_cells(core.grid.cells()));

    match (core.update_state, core.cycle_period) {
        (UpdateState::Unchanged, _) => {
            log::debug!("generation {} is stable", core.generation);
        }
        (_, Some(period)) => {
            log::debug!("generation {} repeats with period {}", core.generation, period);
        }
        _ => {}
    }

    if let Some(start) = tick_start {
        let stats = &mut core.perf_stats;
        stats.rows_processed = delta.rows_processed;
        stats.rows_skipped = delta.rows_skipped;
        stats.births = delta.births;
        stats.deaths = delta.deaths;
        stats.population = u32::try_from(core.grid.population()).unwrap_or(u32::MAX);
        stats.generation = u32::try_from(core.generation).unwrap_or(u32::MAX);
        stats.grid_size = u32::try_from(core.grid.size()).unwrap_or(u32::MAX);
        // current + scratch buffers, plus row counts
        stats.memory_bytes = stats
            .grid_size
            .saturating_mul(2)
            .saturating_add(core.grid.rows().saturating_mul(4));
        stats.tick_ms = start.elapsed_ms();
    }
}

pub(super) fn run(core: &mut LifeCore, n: u32) -> u32 {
    for done in 0..n {
        tick(core);
        if core.is_halted() {
            return done + 1;
        }
    }
    n
}

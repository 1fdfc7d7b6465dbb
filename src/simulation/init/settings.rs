use crate::domain::config::validate_tick_interval;
use crate::error::ConfigError;

use super::perf_stats::PerfStats;
use super::LifeCore;

pub(super) fn enable_perf_metrics(core: &mut LifeCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &LifeCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn tick_interval_ms(core: &LifeCore) -> u32 {
    core.tick_interval_ms
}

pub(super) fn set_tick_interval_ms(core: &mut LifeCore, ms: u32) -> Result<(), ConfigError> {
    validate_tick_interval(ms)?;
    core.tick_interval_ms = ms;
    log::info!("tick interval set to {} ms", ms);
    Ok(())
}

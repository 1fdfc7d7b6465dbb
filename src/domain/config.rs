//! Engine configuration, loaded from JSON the same way hosts hand us other
//! content: one flat object, every field optional.
//!
//! ```json
//! { "rows": 120, "cols": 75, "tick_interval_ms": 500, "cycle_history": 10 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ROWS: i32 = 120;
pub const DEFAULT_COLS: i32 = 75;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 500;
pub const DEFAULT_CYCLE_HISTORY: usize = 10;
pub const MAX_CYCLE_HISTORY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Signed like the constructor: negative values are sign-flipped.
    pub rows: i32,
    pub cols: i32,
    /// Cadence the host timer should tick at. The engine never runs a timer.
    pub tick_interval_ms: u32,
    /// Generations remembered for cycle detection.
    pub cycle_history: usize,
    pub perf_metrics: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cycle_history: DEFAULT_CYCLE_HISTORY,
            perf_metrics: false,
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LifeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tick_interval(self.tick_interval_ms)?;
        if self.cycle_history == 0 || self.cycle_history > MAX_CYCLE_HISTORY {
            return Err(ConfigError::InvalidHistoryDepth {
                got: self.cycle_history,
                max: MAX_CYCLE_HISTORY,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_tick_interval(ms: u32) -> Result<(), ConfigError> {
    if ms == 0 {
        return Err(ConfigError::InvalidTickInterval(ms));
    }
    Ok(())
}

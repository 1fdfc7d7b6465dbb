use wasm_bindgen::prelude::*;

use crate::domain::cell::{CellState, CELL_INVALID};
use crate::domain::patterns;

use super::perf_stats::PerfStats;
use super::LifeCore;

/// JS handle to the engine. Numeric contract: cell reads return 0/1 or -1
/// for an out-of-bounds index; `updated()` returns -1/0/1.
#[wasm_bindgen]
pub struct Life {
    core: LifeCore,
}

#[wasm_bindgen]
impl Life {
    /// Create an all-dead grid; negative dimensions are sign-flipped
    #[wasm_bindgen(constructor)]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            core: LifeCore::new(rows, cols),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Life, JsValue> {
        LifeCore::from_config_json(json)
            .map(|core| Self { core })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 {
        u32::try_from(self.core.population()).unwrap_or(u32::MAX)
    }

    /// Flip a cell; returns the new state or -1
    pub fn toggle(&mut self, row: i32, col: i32) -> i8 {
        self.core.toggle(row, col).map_or(CELL_INVALID, CellState::code)
    }

    #[wasm_bindgen(js_name = currentState)]
    pub fn current_state(&self, row: i32, col: i32) -> i8 {
        self.core.current_state(row, col).map_or(CELL_INVALID, CellState::code)
    }

    /// Paint a cell; false if out of bounds or already in that state
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) -> bool {
        self.core.set_cell(row, col, CellState::from(alive)).unwrap_or(false)
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Tick up to `n` times, stopping once stable
    pub fn run(&mut self, n: u32) -> u32 {
        self.core.run(n)
    }

    pub fn updated(&self) -> i8 {
        self.core.updated().code()
    }

    #[wasm_bindgen(js_name = isHalted)]
    pub fn is_halted(&self) -> bool {
        self.core.is_halted()
    }

    #[wasm_bindgen(js_name = cyclePeriod)]
    pub fn cycle_period(&self) -> Option<u32> {
        self.core.cycle_period().map(|p| p as u32)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Stamp a named preset; false if the name is unknown
    #[wasm_bindgen(js_name = applyPattern)]
    pub fn apply_pattern(&mut self, name: &str, row: u32, col: u32, clear_first: bool) -> bool {
        match patterns::find(name) {
            Some(pattern) => {
                self.core.apply_pattern(pattern, row, col, clear_first);
                true
            }
            None => {
                log::warn!("unknown pattern {:?}", name);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = patternNames)]
    pub fn pattern_names() -> Vec<String> {
        patterns::names().map(str::to_string).collect()
    }

    #[wasm_bindgen(getter, js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.core.tick_interval_ms()
    }

    #[wasm_bindgen(js_name = setTickIntervalMs)]
    pub fn set_tick_interval_ms(&mut self, ms: u32) -> Result<(), JsValue> {
        self.core
            .set_tick_interval_ms(ms)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Pointer into WASM memory for a zero-copy `Uint8Array` view.
    /// Stays valid until the next `tick` (buffers swap).
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    #[wasm_bindgen(js_name = toText)]
    pub fn to_text(&self) -> String {
        self.core.grid().to_string()
    }
}

impl Life {
    pub fn core(&self) -> &LifeCore {
        &self.core
    }
}

//! Life Engine - Conway's Game of Life simulation in WASM
//!
//! Bounded grid (no wrap-around), B3/S23 rule, double-buffered ticks.
//!
//! Layout:
//! - core/        - Safety macros, logging sink
//! - spatial/     - Grid storage, indexing, neighbor counting
//! - domain/      - Cell states, rule, patterns, config
//! - simulation/  - Engine orchestration (tick, commands, history, perf)
//! - api/         - Public JS API

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod error;
pub mod spatial;
pub mod domain;
pub mod simulation;
pub mod api;

// Compatibility re-exports (keeps short paths working)
pub use spatial::grid;
pub use domain::cell;
pub use domain::patterns;
pub use domain::rules;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if crate::core::utils::logging::install(log::LevelFilter::Info) {
        log::info!("life engine {} initialized", version());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{Life, PerfStats};
pub use domain::cell::{CellState, UpdateState};
pub use domain::config::LifeConfig;
pub use error::{ConfigError, GridError};
pub use simulation::LifeCore;

// Export cell codes for JS
#[wasm_bindgen]
pub fn cell_dead() -> i8 { domain::cell::CELL_DEAD }
#[wasm_bindgen]
pub fn cell_alive() -> i8 { domain::cell::CELL_ALIVE }
#[wasm_bindgen]
pub fn cell_invalid() -> i8 { domain::cell::CELL_INVALID }

// Export update codes for JS
#[wasm_bindgen]
pub fn update_never_ticked() -> i8 { UpdateState::NeverTicked.code() }
#[wasm_bindgen]
pub fn update_unchanged() -> i8 { UpdateState::Unchanged.code() }
#[wasm_bindgen]
pub fn update_changed() -> i8 { UpdateState::Changed.code() }

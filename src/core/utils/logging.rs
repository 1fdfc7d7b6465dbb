//! Console sink for the `log` facade.
//!
//! Engine code logs through `log::{debug, info, warn}`. In the browser the
//! records go to `console.*`; natively they go to stderr unless the host
//! installs its own logger first (tests use `env_logger`).

use log::{LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[life-engine] {} {}", record.level(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from(line);
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&value),
                log::Level::Warn => web_sys::console::warn_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Returns false if a logger was already set
/// (e.g. `init()` called twice, or a native host installed its own).
pub fn install(level: LevelFilter) -> bool {
    if log::set_logger(&LOGGER).is_err() {
        return false;
    }
    log::set_max_level(level);
    true
}

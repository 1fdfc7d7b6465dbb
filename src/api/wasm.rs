//! JS-facing surface. Everything here is `#[wasm_bindgen]`; native callers
//! use `LifeCore` directly.

pub use crate::simulation::{Life, PerfStats};

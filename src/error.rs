//! Error types for the engine.
//!
//! Cell access returns [`GridError`]; configuration parsing and validation
//! return [`ConfigError`]. The JS facade flattens both to `JsValue` strings
//! or to the numeric `-1` sentinel.

/// Errors raised by grid construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A cell index fell outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },

    /// Strict construction was asked for negative dimensions.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: i32,
        /// Requested columns.
        cols: i32,
    },

    /// `rows * cols` does not fit in addressable memory.
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
}

/// Errors raised while loading or applying a [`crate::LifeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// The tick interval must be a positive number of milliseconds.
    #[error("tick interval must be positive, got {0} ms")]
    InvalidTickInterval(u32),

    /// The cycle history window is outside `1..=MAX_CYCLE_HISTORY`.
    #[error("cycle history must be between 1 and {max}, got {got}")]
    InvalidHistoryDepth {
        /// Requested depth.
        got: usize,
        /// Upper bound.
        max: usize,
    },

    /// Configured dimensions do not describe a usable grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

//! Zero-Cost Safety Macros
//!
//! Bounds-checked cell access in dev builds, unchecked access in release.
//! Used by the neighbor loop, where every index has already been validated
//! against the grid dimensions.
//!
//! Usage:
//! ```rust
//! use life_engine::fast;
//!
//! let idx = 2;
//!
//! let cells = vec![0u8, 1, 1, 0, 1];
//! // Read: fast!(slice, [index])
//! let alive = *fast!(cells, [idx]);
//! assert_eq!(alive, 1);
//!
//! let mut next = vec![0u8; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(next, [idx] = 1);
//! assert_eq!(next[idx], 1);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: normal indexing, panics with the offending index
/// - Release: `get_unchecked` / `get_unchecked_mut`
///
/// Callers must only pass indices produced by `Grid::index_unchecked`
/// after an `in_bounds` check.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

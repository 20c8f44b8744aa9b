//! Progress Counter Entity
//!
//! The single shared counter. At most one row exists; when no row has
//! been created yet, the counter reads as [`ProgressCounter::DEFAULT`].

/// Progress counter entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressCounter {
    /// Current value; unbounded in both directions
    pub value: i64,
}

impl ProgressCounter {
    /// Value reported before the first write creates the row
    pub const DEFAULT: i64 = 0;

    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

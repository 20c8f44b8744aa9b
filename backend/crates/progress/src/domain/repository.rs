//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::error::ProgressResult;

/// Progress counter repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Atomically add `delta` to the counter, creating it with `delta`
    /// when absent. Returns the resulting value.
    async fn adjust(&self, delta: i64) -> ProgressResult<i64>;

    /// Read the current value; `None` when no row exists yet
    async fn current(&self) -> ProgressResult<Option<i64>>;
}

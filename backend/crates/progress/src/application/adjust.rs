//! Adjust Progress Use Case
//!
//! Applies a signed delta to the shared counter. Increment passes the
//! request number through; decrement negates it, so a first-ever
//! decrement creates the counter at the negated value.

use std::sync::Arc;

use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;

/// Adjust progress use case
pub struct AdjustProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> AdjustProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Apply the delta and return the new counter value
    pub async fn execute(&self, delta: i64) -> ProgressResult<i64> {
        let value = self.repo.adjust(delta).await?;

        tracing::debug!(delta, value, "Progress counter adjusted");

        Ok(value)
    }
}

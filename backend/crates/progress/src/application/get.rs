//! Get Progress Use Case
//!
//! Reads the current counter value, defaulting to zero before the first
//! write has created the row.

use std::sync::Arc;

use crate::domain::entity::ProgressCounter;
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;

/// Get progress use case
pub struct GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ProgressResult<i64> {
        let value = self
            .repo
            .current()
            .await?
            .unwrap_or(ProgressCounter::DEFAULT);

        Ok(value)
    }
}

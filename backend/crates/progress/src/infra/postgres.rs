//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

/// PostgreSQL-backed progress repository.
///
/// The `presale_progress` table is keyed by a constant `singleton`
/// column; `adjust` is a single insert-or-add upsert, so concurrent
/// writers serialize on the row instead of racing a read-modify-write.
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn adjust(&self, delta: i64) -> ProgressResult<i64> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO presale_progress (singleton, value)
            VALUES (TRUE, $1)
            ON CONFLICT (singleton) DO UPDATE SET
                value = presale_progress.value + EXCLUDED.value,
                updated_at = now()
            RETURNING value
            "#,
        )
        .bind(delta)
        .fetch_one(&self.pool)
        .await
        .map_err(ProgressError::Update)?;

        Ok(value)
    }

    async fn current(&self) -> ProgressResult<Option<i64>> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT value FROM presale_progress
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(ProgressError::Fetch)?;

        Ok(value)
    }
}

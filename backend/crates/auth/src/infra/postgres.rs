//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::AdminAccount;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed admin repository.
///
/// The `admin_account` table is keyed by a constant `singleton` column,
/// so at most one row can exist and the upsert has a stable conflict
/// target.
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminRepository for PgAdminRepository {
    async fn find(&self) -> AuthResult<Option<AdminAccount>> {
        let row = sqlx::query_as::<_, (String, bool, DateTime<Utc>)>(
            r#"
            SELECT password_hash, initialized, updated_at
            FROM admin_account
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(hash, initialized, updated_at)| {
            let password_hash = HashedPassword::from_stored(hash)
                .map_err(|e| AuthError::Internal(format!("Corrupt admin password hash: {e}")))?;
            Ok(AdminAccount {
                password_hash,
                initialized,
                updated_at,
            })
        })
        .transpose()
    }

    async fn upsert(&self, account: &AdminAccount) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_account (singleton, password_hash, initialized, updated_at)
            VALUES (TRUE, $1, $2, $3)
            ON CONFLICT (singleton) DO UPDATE SET
                password_hash = EXCLUDED.password_hash,
                initialized = EXCLUDED.initialized,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(account.password_hash.as_str())
        .bind(account.initialized)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

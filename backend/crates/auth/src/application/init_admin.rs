//! Init Admin Use Case
//!
//! Bootstraps (or re-bootstraps) the singleton admin account from the
//! configured password. Idempotent: repeated calls reset the password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::AdminAccount;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

/// Init admin use case
pub struct InitAdminUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> InitAdminUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> AuthResult<()> {
        let raw = self
            .config
            .bootstrap_password
            .clone()
            .ok_or(AuthError::BootstrapPasswordMissing)?;

        let password = ClearTextPassword::new(raw)?;
        let password_hash = password.hash()?;

        self.repo.upsert(&AdminAccount::new(password_hash)).await?;

        tracing::info!("Admin account created or updated");

        Ok(())
    }
}

//! Authenticate Use Case
//!
//! Verifies the admin password and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Check the supplied password against the stored hash; on success,
    /// return a signed session token.
    pub async fn execute(&self, password: String) -> AuthResult<String> {
        let password = ClearTextPassword::new(password)?;

        let account = self
            .repo
            .find()
            .await?
            .ok_or(AuthError::AdminNotInitialized)?;

        if !account.can_authenticate() {
            return Err(AuthError::AdminNotInitialized);
        }

        if !account.password_hash.verify(&password) {
            return Err(AuthError::InvalidPassword);
        }

        self.tokens.issue()
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::AdminAccount;
use crate::error::AuthResult;

/// Admin account repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Load the singleton admin account, if it exists
    async fn find(&self) -> AuthResult<Option<AdminAccount>>;

    /// Create or overwrite the singleton admin account
    async fn upsert(&self, account: &AdminAccount) -> AuthResult<()>;
}

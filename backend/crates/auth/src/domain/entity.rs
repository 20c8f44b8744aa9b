//! Admin Account Entity
//!
//! The single administrator record. Exactly one account exists; the
//! storage layer enforces the singleton shape with a constant-key row.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

/// Admin account entity
#[derive(Debug, Clone)]
pub struct AdminAccount {
    /// bcrypt hash of the admin password
    pub password_hash: HashedPassword,
    /// Set on bootstrap; never cleared
    pub initialized: bool,
    /// Last bootstrap timestamp
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Create a freshly bootstrapped account
    pub fn new(password_hash: HashedPassword) -> Self {
        Self {
            password_hash,
            initialized: true,
            updated_at: Utc::now(),
        }
    }

    /// Whether this account can be authenticated against
    pub fn can_authenticate(&self) -> bool {
        self.initialized
    }
}

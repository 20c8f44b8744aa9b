//! Token Service
//!
//! Issues and verifies the stateless admin session token: an HS256 JWT
//! with a fixed validity window and a single `admin` claim. Nothing is
//! persisted; possession of a token that verifies is the whole session.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims carried by an admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Asserts admin identity
    pub admin: bool,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiration (seconds since epoch)
    pub exp: i64,
}

/// Token issue/verify service
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Build the signing and verification keys from the configured secret
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl: config.token_ttl,
        }
    }

    /// Issue a fresh token valid for the configured TTL
    pub fn issue(&self) -> AuthResult<String> {
        let now = Utc::now();
        let expiry = now + chrono::Duration::seconds(self.ttl.as_secs() as i64);

        let claims = AdminClaims {
            admin: true,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Every validation failure collapses to [`AuthError::InvalidToken`];
    /// callers never learn whether the signature or the expiry was at fault.
    pub fn verify(&self, token: &str) -> AuthResult<AdminClaims> {
        let data = decode::<AdminClaims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}

//! Auth Middleware
//!
//! Bearer-token guard for protected routes. Stateless: the token carries
//! its own expiry, so verification needs no repository access.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct TokenGuardState {
    pub tokens: Arc<TokenService>,
}

impl TokenGuardState {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(config)),
        }
    }
}

/// Middleware that requires a valid admin bearer token.
///
/// Missing token → 401. Present but invalid or expired → 403. Any token
/// that verifies grants access; there is no claim-level authorization.
pub async fn require_admin_token(
    State(state): State<TokenGuardState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(AuthError::MissingToken.into_response());
    };

    if let Err(e) = state.tokens.verify(token) {
        return Err(e.into_response());
    }

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

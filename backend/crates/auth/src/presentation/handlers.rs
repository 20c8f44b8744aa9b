//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{AuthenticateUseCase, InitAdminUseCase};
use crate::domain::repository::AdminRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthenticateRequest, AuthenticateResponse, MessageResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Init Admin
// ============================================================================

/// GET /api/init-admin
///
/// Operational bootstrap endpoint: takes nothing from the caller, hashes
/// the configured admin password and upserts the singleton account.
pub async fn init_admin<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = InitAdminUseCase::new(state.repo.clone(), state.config.clone());

    use_case.execute().await?;

    Ok("Admin created or updated")
}

// ============================================================================
// Authenticate
// ============================================================================

/// POST /api/authenticate
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<AuthenticateRequest>,
) -> AuthResult<Json<AuthenticateResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());

    let token = use_case.execute(req.password).await?;

    Ok(Json(AuthenticateResponse { token }))
}

// ============================================================================
// Verify Token
// ============================================================================

/// GET /api/verify-token
///
/// Runs behind the bearer-token middleware; reaching the handler means
/// the token already verified.
pub async fn verify_token() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Token valid".to_string(),
    })
}

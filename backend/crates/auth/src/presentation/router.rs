//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::infra::postgres::PgAdminRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{TokenGuardState, require_admin_token};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAdminRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let guard = TokenGuardState::new(&config);

    let state = AuthAppState {
        tokens: Arc::new(TokenService::new(&config)),
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/verify-token", get(handlers::verify_token))
        .route_layer(middleware::from_fn_with_state(guard, require_admin_token));

    Router::new()
        .route("/authenticate", post(handlers::authenticate::<R>))
        .route("/init-admin", get(handlers::init_admin::<R>))
        .with_state(state)
        .merge(protected)
}

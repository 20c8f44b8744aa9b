//! Progress Router
//!
//! Write routes sit behind the admin bearer-token middleware; the read
//! route is public.

use auth::middleware::{TokenGuardState, require_admin_token};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the Progress router with PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository, guard: TokenGuardState) -> Router {
    progress_router_generic(repo, guard)
}

/// Create a generic Progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R, guard: TokenGuardState) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route(
            "/incrementProgress",
            post(handlers::increment_progress::<R>),
        )
        .route(
            "/decrementProgress",
            post(handlers::decrement_progress::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_admin_token))
        .with_state(state.clone());

    Router::new()
        .route("/getProgress", get(handlers::get_progress::<R>))
        .with_state(state)
        .merge(protected)
}

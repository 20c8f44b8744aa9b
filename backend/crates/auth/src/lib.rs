//! Auth (Admin Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin account entity, repository trait
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - One-time admin bootstrap from a configured password
//! - Password authentication issuing a signed bearer token
//! - Stateless token verification middleware for protected routes
//!
//! ## Security Model
//! - Password hashed with bcrypt (cost 10), verified in constant time
//! - Tokens are HS256 JWTs with a 1-hour expiry and an `admin` claim
//! - No lockout or backoff on failed attempts (deliberate scope cut)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAdminRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAdminRepository as AdminStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

//! Progress Counter Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Counter entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - A single shared signed counter, created lazily on first write
//! - Writes are atomic at the storage layer (insert-or-add upsert), so
//!   concurrent adjustments cannot lose updates
//! - Reads are public; writes sit behind the admin bearer token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProgressError, ProgressResult};
pub use infra::postgres::PgProgressRepository;
pub use presentation::router::progress_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProgressRepository as ProgressStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;

//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ProgressAppState;
pub use router::{progress_router, progress_router_generic};

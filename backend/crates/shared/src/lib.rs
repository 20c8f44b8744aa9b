//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest core shared by every backend crate: the unified error
//! type, its HTTP classification, and conversions to the web layer.
//! Only things with a consistent meaning across all domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

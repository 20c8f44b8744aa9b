//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Password policy, hashing (bcrypt), and verification
//! - Zeroization of sensitive data

pub mod password;

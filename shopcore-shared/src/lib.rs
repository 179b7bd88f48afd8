//! # Shopcore Shared Library
//!
//! This crate contains the data layer shared by the Shopcore API server and
//! its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pooling and migrations

pub mod db;
pub mod models;

/// Current version of the shopcore shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! # TaskBoard Shared Library
//!
//! This crate contains the data-access layer shared by the TaskBoard API
//! server: the database connection pool, the entity repositories, and the
//! ownership/integrity guard.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL connection pool management
//! - `models`: Database models and their CRUD operations
//! - `ownership`: Link-uniqueness and task-ownership checks
//! - `error`: Repository error type shared by models and guard

pub mod db;
pub mod error;
pub mod models;
pub mod ownership;

/// Current version of the TaskBoard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

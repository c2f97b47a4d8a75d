//! # Roster Infrastructure
//!
//! Concrete implementations of the store port defined in `roster-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL user store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::InMemoryUserRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresUserRepository};

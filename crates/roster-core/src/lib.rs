//! # Roster Core
//!
//! The domain layer of the Roster user service.
//! This crate contains the field-merge and credential rules plus the
//! per-operation orchestration, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::RepoError;
pub use service::UserService;

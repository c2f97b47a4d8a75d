//! # Roster Shared
//!
//! Wire types shared by the server and its clients: request bodies, the
//! shaped views of domain records, and problem documents.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

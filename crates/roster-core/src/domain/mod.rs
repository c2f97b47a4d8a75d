//! Domain entities - the core business objects.

mod auth;
mod user;

pub use auth::{AuthenticationResult, Credentials};
pub use user::{NewUser, User, UserId, UserPatch};

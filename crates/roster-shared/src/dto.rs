//! Data Transfer Objects - request/response types for the API.
//!
//! Response types are the only outward views of a user; none of them
//! carries the password.

use roster_core::domain::{AuthenticationResult, Credentials, NewUser, User, UserId, UserPatch};
use serde::{Deserialize, Serialize};

/// Request to create a user. Any client-supplied `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.email, req.password)
    }
}

/// Sparse update. Absent or `null` members leave the field unchanged and
/// unknown members are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(req: PatchUserRequest) -> Self {
        UserPatch {
            email: req.email,
            password: req.password,
        }
    }
}

/// Request to check a user's credentials.
///
/// Missing or `null` members are accepted on the wire but never match a
/// stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AuthenticateRequest {
    /// `None` unless both members were supplied.
    pub fn into_credentials(self) -> Option<Credentials> {
        Some(Credentials::new(self.email?, self.password?))
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Store size after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Authentication outcome. `user` is omitted entirely when denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl From<AuthenticationResult> for AuthenticationResponse {
    fn from(result: AuthenticationResult) -> Self {
        Self {
            authenticated: result.authenticated,
            user: result.user.map(UserResponse::from),
        }
    }
}

//! Credential checking.

use super::user::User;

/// Email/password pair submitted for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Compare against the record found for `self.email`, if any.
    ///
    /// Plain, case-sensitive string equality.
    pub fn check(&self, stored: Option<User>) -> AuthenticationResult {
        match stored {
            Some(user) if user.password == self.password => AuthenticationResult::granted(user),
            _ => AuthenticationResult::denied(),
        }
    }
}

/// Outcome of an authenticate call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl AuthenticationResult {
    pub fn granted(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    pub fn denied() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}

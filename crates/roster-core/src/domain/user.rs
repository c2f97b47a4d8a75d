/// Store-assigned user identifier.
pub type UserId = i64;

/// User entity - an identity record.
///
/// `password` is held exactly as received. This type has no serializer;
/// outward views live in `roster-shared`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
}

/// A user that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Attach the id handed out by the store.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
        }
    }
}

/// Sparse update for a user.
///
/// One slot per mutable field; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Overwrite the fields present in this patch. `id` is never touched.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}

impl User {
    /// Merge a sparse update into this record and hand it back for saving.
    pub fn merge(mut self, patch: UserPatch) -> Self {
        patch.apply_to(&mut self);
        self
    }
}

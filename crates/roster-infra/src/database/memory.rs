//! In-memory user store - used when no database is configured, and in tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::domain::{NewUser, User, UserId};
use roster_core::error::RepoError;
use roster_core::ports::{BaseRepository, UserRepository};

/// User table kept in a `BTreeMap`, so iteration follows ascending id.
///
/// Note: Data is lost on process restart.
pub struct InMemoryUserRepository {
    rows: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, UserId> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    /// Update only; an id that is not stored is a query error.
    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&user.id) else {
            return Err(RepoError::Query(format!("no user with id {}", user.id)));
        };
        *row = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.len() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let user = new_user.with_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let a = repo.create(NewUser::new("a@example.com", "pw")).await.unwrap();
        let b = repo.create(NewUser::new("b@example.com", "pw")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            repo.create(NewUser::new(email, "pw")).await.unwrap();
        }
        repo.delete(2).await.unwrap();

        let ids: Vec<UserId> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let next = repo.create(NewUser::new("d@example.com", "pw")).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(NewUser::new("a@example.com", "pw")).await.unwrap();

        user.password = "changed".to_string();
        repo.save(user.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_after_delete_fails() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(NewUser::new("a@example.com", "pw")).await.unwrap();
        repo.delete(user.id).await.unwrap();

        user.email = "b@example.com".to_string();
        let err = repo.save(user.clone()).await.unwrap_err();

        assert!(matches!(err, RepoError::Query(_)));
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = InMemoryUserRepository::new();
        repo.create(NewUser::new("a@example.com", "pw")).await.unwrap();

        repo.delete(42).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(NewUser::new("a@example.com", "pw")).await.unwrap();

        assert_eq!(repo.find_by_email("a@example.com").await.unwrap(), Some(user));
        assert_eq!(repo.find_by_email("A@example.com").await.unwrap(), None);
    }
}

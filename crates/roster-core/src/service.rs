//! Per-operation orchestration over an injected user repository.

use std::sync::Arc;

use crate::domain::{AuthenticationResult, Credentials, NewUser, User, UserId, UserPatch};
use crate::error::RepoError;
use crate::ports::UserRepository;

/// Stateless user operations. Each call performs at most one read and one
/// write against the store.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn list(&self) -> Result<Vec<User>, RepoError> {
        self.users.find_all().await
    }

    pub async fn get(&self, id: UserId) -> Result<Option<User>, RepoError> {
        self.users.find_by_id(id).await
    }

    pub async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let created = self.users.create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Merge `patch` into the stored user and persist it.
    ///
    /// A missing user yields `Ok(None)`, not an error.
    pub async fn patch(&self, id: UserId, patch: UserPatch) -> Result<Option<User>, RepoError> {
        let Some(user) = self.users.find_by_id(id).await? else {
            tracing::debug!(user_id = id, "Patch target not found");
            return Ok(None);
        };

        let saved = self.users.save(user.merge(patch)).await?;
        Ok(Some(saved))
    }

    /// Delete a user and report how many remain in the store.
    pub async fn delete(&self, id: UserId) -> Result<u64, RepoError> {
        self.users.delete(id).await?;
        self.users.count().await
    }

    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticationResult, RepoError> {
        let stored = self.users.find_by_email(&credentials.email).await?;
        let result = credentials.check(stored);

        tracing::debug!(authenticated = result.authenticated, "Authentication attempt");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::ports::BaseRepository;

    #[derive(Default)]
    struct StubRepository {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl BaseRepository<User, UserId> for StubRepository {
        async fn find_all(&self) -> Result<Vec<User>, RepoError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
            Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn save(&self, entity: User) -> Result<User, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|u| u.id == entity.id)
                .ok_or_else(|| RepoError::Query("row vanished".to_string()))?;
            *slot = entity.clone();
            Ok(entity)
        }

        async fn delete(&self, id: UserId) -> Result<(), RepoError> {
            self.rows.lock().unwrap().retain(|u| u.id != id);
            Ok(())
        }

        async fn count(&self) -> Result<u64, RepoError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    #[async_trait]
    impl UserRepository for StubRepository {
        async fn create(&self, user: NewUser) -> Result<User, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            let user = user.with_id(id);
            rows.push(user.clone());
            Ok(user)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(StubRepository::default()))
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let service = service();

        let first = service
            .create(NewUser::new("john@example.com", "password"))
            .await
            .unwrap();
        let second = service
            .create(NewUser::new("eliza@example.com", "password"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_patch_persists_merged_fields() {
        let service = service();
        let user = service
            .create(NewUser::new("john@example.com", "password1"))
            .await
            .unwrap();

        let patch = UserPatch {
            email: Some("rob@example.com".to_string()),
            password: None,
        };
        let updated = service.patch(user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.id, user.id);
        let stored = service.get(user.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "rob@example.com");
        assert_eq!(stored.password, "password1");
    }

    #[tokio::test]
    async fn test_patch_missing_user_is_none() {
        let service = service();

        let result = service.patch(404, UserPatch::default()).await.unwrap();

        assert!(result.is_none());
        assert_eq!(service.list().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_delete_reports_remaining_count_and_is_idempotent() {
        let service = service();
        service
            .create(NewUser::new("june@gmail.com", "password1"))
            .await
            .unwrap();
        let robert = service
            .create(NewUser::new("robert@gmail.com", "password1"))
            .await
            .unwrap();

        assert_eq!(service.delete(robert.id).await.unwrap(), 1);
        assert_eq!(service.delete(robert.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_authenticate_outcomes() {
        let service = service();
        let user = service
            .create(NewUser::new("angelica@example.com", "1234"))
            .await
            .unwrap();

        let ok = service
            .authenticate(&Credentials::new("angelica@example.com", "1234"))
            .await
            .unwrap();
        assert_eq!(ok, AuthenticationResult::granted(user));

        let wrong = service
            .authenticate(&Credentials::new("angelica@example.com", "1235"))
            .await
            .unwrap();
        assert_eq!(wrong, AuthenticationResult::denied());

        let unknown = service
            .authenticate(&Credentials::new("nobody@example.com", "1234"))
            .await
            .unwrap();
        assert_eq!(unknown, AuthenticationResult::denied());
    }
}

//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppResult, OptionExt};
use domain::{User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get the first user with the given id
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Create a user; the id is assigned by the store
    async fn create_user(&self, name: String) -> AppResult<User>;

    /// Rename the first user with the given id
    async fn update_user(&self, id: UserId, name: String) -> AppResult<User>;

    /// Delete the first user with the given id
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, name: String) -> AppResult<User> {
        let user = self.repo.create(name).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, name: String) -> AppResult<User> {
        let user = self.repo.update(id, name).await?;
        debug!(user_id = %user.id, "User renamed");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn manager(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(UserId(2)))
            .returning(|id| Ok(Some(User::new(id, "Daniel"))));

        let user = manager(repo).get_user(UserId(2)).await.unwrap();
        assert_eq!(user, User::new(UserId(2), "Daniel"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = manager(repo).get_user(UserId(999)).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_create_user_passes_name_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq("John Doe".to_string()))
            .times(1)
            .returning(|name| Ok(User::new(UserId(6), name)));

        let user = manager(repo)
            .create_user("John Doe".to_string())
            .await
            .unwrap();
        assert_eq!(user.id, UserId(6));
    }

    #[tokio::test]
    async fn test_update_user_propagates_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _| Err(AppError::NotFound));

        let result = manager(repo)
            .update_user(UserId(999), "Nobody".to_string())
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok(()));

        assert!(manager(repo).delete_user(UserId(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                User::new(UserId(1), "Adrian"),
                User::new(UserId(2), "Daniel"),
            ])
        });
        repo.expect_count().returning(|| Ok(2));

        let service = manager(repo);
        assert_eq!(service.list_users().await.unwrap().len(), 2);
        assert_eq!(service.count_users().await.unwrap(), 2);
    }
}

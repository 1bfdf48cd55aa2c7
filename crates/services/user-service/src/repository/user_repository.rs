//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, IdStrategy};
use domain::{seed_users, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups by id resolve to the first matching user in sequence order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the first user with the given id
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Append a new user and return it with its assigned id
    async fn create(&self, name: String) -> AppResult<User>;

    /// Replace the name of the first user with the given id
    async fn update(&self, id: UserId, name: String) -> AppResult<User>;

    /// Remove the first user with the given id
    async fn delete(&self, id: UserId) -> AppResult<()>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// Ordered user sequence plus id bookkeeping, guarded as one unit.
#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    strategy: IdStrategy,
    /// Next id handed out under `IdStrategy::Sequential`.
    /// Saturates at `i64::MAX`, which is then handed out again.
    next_id: i64,
}

impl StoreState {
    fn new(users: Vec<User>, strategy: IdStrategy) -> Self {
        let len = users.len() as i64;
        let max_id = users.iter().map(|u| u.id.get()).max().unwrap_or(0);

        Self {
            next_id: len.max(max_id).saturating_add(1),
            users,
            strategy,
        }
    }

    fn assign_id(&mut self) -> UserId {
        match self.strategy {
            IdStrategy::Length => UserId(self.users.len() as i64 + 1),
            IdStrategy::Sequential => {
                let id = self.next_id;
                self.next_id = self.next_id.saturating_add(1);
                UserId(id)
            }
        }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// In-memory implementation of UserRepository.
///
/// Each operation holds the lock for its whole read/modify/write, so
/// concurrent requests see the operations in some serial order.
#[derive(Debug)]
pub struct UserStore {
    state: RwLock<StoreState>,
}

impl UserStore {
    /// Create a store holding `users` in the given order
    pub fn with_users(users: Vec<User>, strategy: IdStrategy) -> Self {
        Self {
            state: RwLock::new(StoreState::new(users, strategy)),
        }
    }

    /// Create a store holding the seed users
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_users(seed_users(), strategy)
    }

    /// Create an empty store
    pub fn empty(strategy: IdStrategy) -> Self {
        Self::with_users(Vec::new(), strategy)
    }

    /// Current number of users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, name: String) -> AppResult<User> {
        let mut state = self.state.write().await;
        let user = User::new(state.assign_id(), name);
        state.users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, name: String) -> AppResult<User> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        user.rename(name);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or(AppError::NotFound)?;
        state.users.remove(index);

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.len().await)
    }
}

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use enroll_core::{
    ConnectedUser, Credentials, Email, NewUser, User, UserStore, UserStoreError,
};

/// In-memory user store over an ordered sequence of records.
///
/// Test double for [`super::postgres_user_store::PostgresUserStore`];
/// generates its own ids and rejects duplicate emails the way the
/// database unique constraint would.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<ConnectedUser, UserStoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.mail() == &new_user.mail) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = User::from_new(Uuid::new_v4(), new_user);
        let view = ConnectedUser::from(&user);
        users.push(user);
        Ok(view)
    }

    async fn get_all_users(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user_by_mail(
        &self,
        mail: &Email,
    ) -> Result<Option<ConnectedUser>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.mail() == mail)
            .map(ConnectedUser::from))
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<ConnectedUser>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.id() == *id)
            .map(ConnectedUser::from))
    }

    async fn connect_user(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<ConnectedUser>, UserStoreError> {
        let users = self.users.read().await;
        let Some(user) = users.iter().find(|user| user.mail() == &credentials.mail) else {
            return Ok(None);
        };

        if user.password().matches(&credentials.password) {
            Ok(Some(ConnectedUser::from(user)))
        } else {
            Ok(None)
        }
    }
}

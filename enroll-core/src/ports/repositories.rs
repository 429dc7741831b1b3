use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    user::{ConnectedUser, Credentials, NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("user already exists")]
    DuplicateEmail,
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Capability set required of any user storage backend.
///
/// Lookups return `Ok(None)` when no record matches; an `Err` always
/// means the operation itself failed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record and return it without the password.
    async fn create_user(&self, new_user: NewUser) -> Result<ConnectedUser, UserStoreError>;

    /// Every stored record, passwords included. Unbounded.
    async fn get_all_users(&self) -> Result<Vec<User>, UserStoreError>;

    async fn get_user_by_mail(&self, mail: &Email)
    -> Result<Option<ConnectedUser>, UserStoreError>;

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<ConnectedUser>, UserStoreError>;

    /// The user view, only if a record with that email exists and its
    /// stored password exactly equals the supplied one.
    async fn connect_user(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<ConnectedUser>, UserStoreError>;
}

use enroll_core::{ConnectedUser, NewUser, UserStore, UserStoreError};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegisterError {
    #[error("user already exists")]
    DuplicateEmail,
    #[error("user store error: {0}")]
    Store(UserStoreError),
}

/// Register use case - handles new user registration
pub struct RegisterUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> RegisterUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// The lookup is a fast path only: the store's own duplicate signal
    /// is authoritative, so two racing registrations with the same email
    /// still resolve to a single stored record.
    ///
    /// # Returns
    /// The created user view, or `RegisterError::DuplicateEmail` if the
    /// email is already registered.
    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip_all, fields(mail = %new_user.mail.as_str()))]
    pub async fn execute(&self, new_user: NewUser) -> Result<ConnectedUser, RegisterError> {
        let existing = self
            .user_store
            .get_user_by_mail(&new_user.mail)
            .await
            .map_err(RegisterError::Store)?;

        if existing.is_some() {
            return Err(RegisterError::DuplicateEmail);
        }

        match self.user_store.create_user(new_user).await {
            Ok(created) => Ok(created),
            Err(UserStoreError::DuplicateEmail) => Err(RegisterError::DuplicateEmail),
            Err(other) => Err(RegisterError::Store(other)),
        }
    }
}

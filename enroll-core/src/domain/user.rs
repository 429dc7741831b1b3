use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password::Password, person_name::PersonName};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("name must be at least {} characters", PersonName::MIN_LENGTH)]
    NameTooShort,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("password must be at least {} characters", Password::MIN_LENGTH)]
    PasswordTooShort,
}

/// A persisted user record. Only the stores ever hold one; everything
/// above the storage boundary works with [`ConnectedUser`].
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    name: PersonName,
    lastname: PersonName,
    mail: Email,
    password: Password,
}

impl User {
    /// Assemble a record from a registration payload and a generated id.
    pub fn from_new(id: Uuid, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            lastname: new_user.lastname,
            mail: new_user.mail,
            password: new_user.password,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn lastname(&self) -> &PersonName {
        &self.lastname
    }

    pub fn mail(&self) -> &Email {
        &self.mail
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Registration input: a user without an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: PersonName,
    pub lastname: PersonName,
    pub mail: Email,
    pub password: Password,
}

/// The password-free view returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectedUser {
    pub id: Uuid,
    pub name: PersonName,
    pub lastname: PersonName,
    pub mail: Email,
}

impl From<&User> for ConnectedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            lastname: user.lastname.clone(),
            mail: user.mail.clone(),
        }
    }
}

/// Sign-in input shape. Never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub mail: Email,
    pub password: Password,
}

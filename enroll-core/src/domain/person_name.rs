use serde::Serialize;

use super::user::UserError;

/// A first or last name, at least [`PersonName::MIN_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub const MIN_LENGTH: usize = 4;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() >= Self::MIN_LENGTH {
            Ok(Self(value))
        } else {
            Err(UserError::NameTooShort)
        }
    }
}

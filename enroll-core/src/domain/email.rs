use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::user::UserError;

// Same grammar the registration form enforces client-side: one `@`,
// no whitespace, and at least one dot in the domain part.
static EMAIL_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email grammar must compile")
});

/// A syntactically valid email address.
///
/// Parsing is the only way to construct one, so every `Email` held by
/// the rest of the system has already passed the grammar check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if EMAIL_GRAMMAR.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidEmail)
        }
    }
}

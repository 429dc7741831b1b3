use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A registration password, at least [`Password::MIN_LENGTH`] characters.
///
/// Wrapped in [`Secret`] so it is redacted from `Debug` output and never
/// serialized. Comparison is exact string equality, matching the stored
/// representation.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub const MIN_LENGTH: usize = 8;

    /// Wrap a value read back from storage. Stored values already passed
    /// validation on the way in, so no length check is applied here.
    pub fn from_stored(value: Secret<String>) -> Self {
        Self(value)
    }

    pub fn matches(&self, candidate: &Password) -> bool {
        self.0.expose_secret() == candidate.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() >= Self::MIN_LENGTH {
            Ok(Self(value))
        } else {
            Err(UserError::PasswordTooShort)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_characters() {
        assert!(Password::try_from(Secret::from("hunter22".to_string())).is_ok());
    }

    #[test]
    fn rejects_seven_characters() {
        let result = Password::try_from(Secret::from("hunter2".to_string()));
        assert_eq!(result.unwrap_err(), UserError::PasswordTooShort);
    }

    #[test]
    fn matches_is_exact_equality() {
        let stored = Password::from_stored(Secret::from("secret123".to_string()));
        let good = Password::try_from(Secret::from("secret123".to_string())).unwrap();
        let bad = Password::try_from(Secret::from("secret124".to_string())).unwrap();

        assert!(stored.matches(&good));
        assert!(!stored.matches(&bad));
    }

    #[test]
    fn debug_output_is_redacted() {
        let password = Password::try_from(Secret::from("secret123".to_string())).unwrap();
        assert!(!format!("{password:?}").contains("secret123"));
    }
}

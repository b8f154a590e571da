//! Identifier and password generation.
//!
//! Passwords are stored and mailed in plaintext; everything that touches the raw secret
//! starts here.

use crate::error::RegistrationError;
use rand::Rng;
use std::fmt;
use uuid::Uuid;

/// Characters a password is drawn from: `A-Z a-z 0-9 ! @ # $`.
pub const PASSWORD_ALPHABET: &[u8; 66] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$";

/// A freshly issued identifier/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialIssuer {
    password_length: usize,
}

impl CredentialIssuer {
    /// # Errors
    /// Returns [`RegistrationError::Config`] when `password_length` is zero.
    pub fn new(password_length: usize) -> Result<Self, RegistrationError> {
        if password_length == 0 {
            return Err(RegistrationError::Config {
                message: "password_length must be at least 1".into(),
                context: None,
            });
        }
        Ok(Self { password_length })
    }

    #[must_use]
    pub const fn password_length(&self) -> usize {
        self.password_length
    }

    #[must_use]
    pub fn issue(&self) -> Credentials {
        Credentials { identifier: Self::identifier(), password: self.password() }
    }

    /// A random (v4) UUID in hyphenated form. Uniqueness is not checked.
    #[must_use]
    pub fn identifier() -> String {
        Uuid::new_v4().hyphenated().to_string()
    }

    /// Each character is drawn independently and uniformly from [`PASSWORD_ALPHABET`].
    #[must_use]
    pub fn password(&self) -> String {
        let mut rng = rand::rng();
        (0..self.password_length)
            .map(|_| char::from(PASSWORD_ALPHABET[rng.random_range(0..PASSWORD_ALPHABET.len())]))
            .collect()
    }
}

impl Default for CredentialIssuer {
    fn default() -> Self {
        Self { password_length: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_has_no_duplicates() {
        let unique: HashSet<_> = PASSWORD_ALPHABET.iter().collect();
        assert_eq!(unique.len(), 66);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(CredentialIssuer::new(0), Err(RegistrationError::Config { .. })));
    }

    #[test]
    fn default_issues_ten_character_passwords() {
        let credentials = CredentialIssuer::default().issue();
        assert_eq!(credentials.password.len(), 10);
        assert_eq!(credentials.identifier.len(), 36);
    }

    #[test]
    fn identifiers_are_v4_uuids() {
        let identifier = CredentialIssuer::identifier();
        let parsed = Uuid::parse_str(&identifier).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.hyphenated().to_string(), identifier);
    }

    #[test]
    fn identifiers_do_not_repeat() {
        let seen: HashSet<String> = (0..10_000).map(|_| CredentialIssuer::identifier()).collect();
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn debug_hides_password() {
        let credentials =
            Credentials { identifier: "id-1".to_owned(), password: "Zq9!Zq9!Zq".to_owned() };
        assert!(!format!("{credentials:?}").contains("Zq9!"));
    }

    proptest! {
        #[test]
        fn passwords_have_requested_length_and_alphabet(length in 1usize..256) {
            let password = CredentialIssuer::new(length).unwrap().password();
            prop_assert_eq!(password.chars().count(), length);
            prop_assert!(password.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));
        }
    }
}

//! Random password generation
//!
//! Passwords are drawn uniformly from [`PASSWORD_ALPHABET`] using
//! [`OsRng`], the operating system's cryptographically secure source.

use rand::rngs::OsRng;
use rand::Rng;

use crate::constants::PASSWORD_ALPHABET;
use crate::{Error, Result};

/// A generated password
///
/// The value is only ever held in memory. `Debug` output is redacted so
/// the password cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (the alphabet is ASCII, so also bytes)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a password of exactly `length` characters.
///
/// Fails with [`Error::InvalidArgument`] when `length` is zero.
pub fn generate(length: usize) -> Result<Password> {
    if length == 0 {
        return Err(Error::InvalidArgument(
            "password length must be at least 1".to_string(),
        ));
    }

    let mut rng = OsRng;
    let value = (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect();

    Ok(Password(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PASSWORD_LENGTH, PASSWORD_SYMBOLS};

    #[test]
    fn test_generate_exact_length() {
        for length in [1, 2, 16, DEFAULT_PASSWORD_LENGTH, 200] {
            let password = generate(length).unwrap();
            assert_eq!(password.len(), length);
            assert_eq!(password.as_str().chars().count(), length);
        }
    }

    #[test]
    fn test_generate_uses_alphabet_only() {
        let password = generate(500).unwrap();
        for c in password.as_str().chars() {
            assert!(
                c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c),
                "unexpected character {c:?}"
            );
        }
    }

    #[test]
    fn test_generate_differs_between_calls() {
        let a = generate(DEFAULT_PASSWORD_LENGTH).unwrap();
        let b = generate(DEFAULT_PASSWORD_LENGTH).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_zero_length_rejected() {
        assert!(matches!(generate(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_alphabet_matches_symbols() {
        let expected_len = 26 + 26 + 10 + PASSWORD_SYMBOLS.len();
        assert_eq!(PASSWORD_ALPHABET.len(), expected_len);
        assert!(PASSWORD_ALPHABET.ends_with(PASSWORD_SYMBOLS.as_bytes()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = generate(12).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains(password.as_str()));
        assert!(debug.contains("12"));
    }
}

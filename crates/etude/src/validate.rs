//! Input validators
//!
//! Range and shape checks with typed errors; the type system already rules
//! out wrong-type inputs at the boundary.

use crate::error::{Error, Result};

/// Username length bounds for [`validate_user_input`]
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 250;

/// Age bounds for [`validate_user_input`]
const AGE_MIN: u32 = 18;
const AGE_MAX: u32 = 100;

/// Username length bounds for [`is_valid_username`]
const HANDLE_MIN: usize = 5;
const HANDLE_MAX: usize = 15;

/// Minimum password length for [`is_strong_password`]
const PASSWORD_MIN: usize = 8;

/// Validate a username / age pair for registration
///
/// Every failing field is collected, so the error message names all of them.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] naming each failing field.
pub fn validate_user_input(username: &str, age: u32) -> Result<()> {
    let mut problems = Vec::new();

    let length = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        problems.push("invalid username");
    }
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        problems.push("invalid age");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?problems, "user input rejected");
        Err(Error::InvalidInput(problems.join(", ")))
    }
}

/// Check if a username falls within the allowed length range
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    (HANDLE_MIN..=HANDLE_MAX).contains(&length)
}

/// Check if a password meets the strength policy
///
/// Requires at least 8 characters, one uppercase letter, one lowercase
/// letter, and one digit.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

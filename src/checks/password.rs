//! Password checks - presence, minimum length, common-password blacklist.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::blacklist::is_common_password;
use crate::types::FieldError;

const MIN_LENGTH: usize = 8;

/// Checks that a password was entered.
pub fn password_required_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().is_empty() {
        return Some(FieldError::PasswordRequired);
    }
    None
}

/// Checks that the password has at least eight characters.
pub fn password_length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(FieldError::PasswordTooShort);
    }
    None
}

/// Checks the password against the common-password blacklist.
///
/// Case-insensitive exact match; substrings do not count.
pub fn common_password_check(password: &SecretString) -> CheckResult {
    if is_common_password(password.expose_secret()) {
        return Some(FieldError::PasswordTooCommon);
    }
    None
}

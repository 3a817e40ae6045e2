//! Confirm-password checks - presence and match with the password field.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::types::FieldError;

/// Checks that the confirmation value was entered.
pub fn confirm_required_check(confirm: &SecretString) -> CheckResult {
    if confirm.expose_secret().is_empty() {
        return Some(FieldError::ConfirmPasswordRequired);
    }
    None
}

/// Checks that the confirmation matches the password exactly.
///
/// Case-sensitive comparison.
pub fn mismatch_check(password: &SecretString, confirm: &SecretString) -> CheckResult {
    if password.expose_secret() != confirm.expose_secret() {
        return Some(FieldError::PasswordMismatch);
    }
    None
}

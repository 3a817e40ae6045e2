//! Field validators - run the per-field checks in order.
//!
//! Every validator is a deterministic, side-effect-free function of its
//! inputs; calling one twice with the same value yields the same
//! result, so callers may re-validate on every keystroke without
//! coordination.

use secrecy::SecretString;

use crate::checks::{
    CheckResult, common_password_check, confirm_required_check, email_format_check,
    email_required_check, mismatch_check, password_length_check, password_required_check,
};
use crate::types::ValidationResult;

/// Validates the email field.
///
/// Leading and trailing whitespace is ignored. Checks run in order and
/// the first failure is returned.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();

    let checks: [fn(&str) -> CheckResult; 2] = [email_required_check, email_format_check];

    for check in checks {
        if let Some(error) = check(email) {
            return Err(error);
        }
    }
    Ok(())
}

/// Validates the password field.
///
/// Checks run in order and the first failure is returned: a password
/// that is both too short and blacklisted reports the length error.
pub fn validate_password(password: &SecretString) -> ValidationResult {
    let checks: [fn(&SecretString) -> CheckResult; 3] = [
        password_required_check,
        password_length_check,
        common_password_check,
    ];

    for check in checks {
        if let Some(error) = check(password) {
            return Err(error);
        }
    }
    Ok(())
}

/// Validates the confirm-password field against the password field.
pub fn validate_confirm_password(
    password: &SecretString,
    confirm: &SecretString,
) -> ValidationResult {
    if let Some(error) = confirm_required_check(confirm) {
        return Err(error);
    }
    if let Some(error) = mismatch_check(password, confirm) {
        return Err(error);
    }
    Ok(())
}

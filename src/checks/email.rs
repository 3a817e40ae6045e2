//! Email checks - presence and format.

use super::CheckResult;
use crate::types::FieldError;

/// Checks that an email value was entered.
///
/// Callers pass the already-trimmed value.
pub fn email_required_check(email: &str) -> CheckResult {
    if email.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    None
}

/// Checks the email against the form's loose `local@domain.tld` shape.
pub fn email_format_check(email: &str) -> CheckResult {
    if !matches_email_pattern(email) {
        return Some(FieldError::EmailFormat);
    }
    None
}

/// Accepts one or more non-whitespace-non-`@` characters, an `@`, then a
/// domain containing a `.` with at least one such character on each
/// side of it.
///
/// Deliberately permissive, not RFC 5322: consecutive dots, trailing
/// dots and non-ASCII characters all pass, and some valid addresses are
/// rejected. Kept loose so the engine accepts and rejects exactly the
/// same addresses as the form it backs.
fn matches_email_pattern(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot needs at least one character before and after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

//! Password strength scoring.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_common_password;
use crate::types::{StrengthEvaluation, StrengthScore};

const COMMON_PASSWORD_PENALTY: u8 = 2;

/// Scores the password and returns the evaluation.
///
/// Every predicate contributes independently: three length thresholds
/// and four character classes award one point each, and a blacklisted
/// password loses two points, floored at zero. An empty password yields
/// no score at all rather than a weak one.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthEvaluation { score: None };
    }

    let length = pwd.chars().count();
    let mut score: u8 = 0;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if has_lower(pwd) {
        score += 1;
    }
    if has_upper(pwd) {
        score += 1;
    }
    if has_digit(pwd) {
        score += 1;
    }
    if has_symbol(pwd) {
        score += 1;
    }

    if is_common_password(pwd) {
        score = score.saturating_sub(COMMON_PASSWORD_PENALTY);
    }

    StrengthEvaluation {
        score: Some(StrengthScore::new(score)),
    }
}

fn has_lower(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

fn has_upper(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside ASCII alphanumerics counts: punctuation, spaces and
/// non-ASCII characters included.
fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| !c.is_ascii_alphanumeric())
}

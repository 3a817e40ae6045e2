//! Core value types returned by the validation engine.

use std::fmt;

use thiserror::Error;

/// Validation failure for a single form field.
///
/// Each variant renders, via `Display`, the exact message shown next to
/// the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("This password is too common. Please choose a stronger password")]
    PasswordTooCommon,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Result of validating a single field.
pub type ValidationResult = Result<(), FieldError>;

/// Raw additive strength score.
///
/// Seven independent predicates contribute one point each, so the
/// value is always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Coarse three-bucket classification of password quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a raw score onto a level. The thresholds are a fixed design
    /// choice, not derived from the predicate count.
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a password strength evaluation.
///
/// `score` is `None` for an empty password: nothing entered is a
/// distinct state from a weak password, and callers should render a
/// neutral prompt instead of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: Option<StrengthScore>,
}

impl StrengthEvaluation {
    pub fn level(&self) -> Option<StrengthLevel> {
        self.score.map(StrengthLevel::from_score)
    }
}

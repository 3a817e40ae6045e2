//! Field validation checks
//!
//! Each check inspects one rule for one field. The validators run them
//! in a fixed order and the first failure wins, so the message the user
//! sees is always the most specific applicable one.

mod confirm;
mod email;
mod password;

pub use confirm::{confirm_required_check, mismatch_check};
pub use email::{email_format_check, email_required_check};
pub use password::{common_password_check, password_length_check, password_required_check};

use crate::types::FieldError;

/// Result type for check functions.
/// - `Some(error)` - Check failed
/// - `None` - Check passed
pub type CheckResult = Option<FieldError>;

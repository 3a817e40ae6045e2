//! Registration form validation library
//!
//! This library provides real-time validation for a signup form's
//! email, password and confirm-password fields, a password strength
//! score, and a whole-form error snapshot, with configurable
//! common-password blacklist support.
//!
//! # Features
//!
//! - `async` (default): Enables the simulated async submission flow
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use signup_validation::{evaluate_password_strength, validate_email, validate_password};
//! use secrecy::SecretString;
//!
//! assert!(validate_email("user@example.com").is_ok());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! assert!(validate_password(&password).is_ok());
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {:?}", evaluation.level());
//! ```

// Internal modules
mod blacklist;
mod checks;
mod form;
mod strength;
mod types;
mod validator;

#[cfg(feature = "async")]
mod submit;

// Public API
pub use blacklist::{
    BlacklistError, get_blacklist, get_blacklist_path, init_blacklist, init_blacklist_from_path,
    is_common_password,
};
pub use form::{FormErrors, FormField, validate_form};
pub use strength::evaluate_password_strength;
pub use types::{
    FieldError, StrengthEvaluation, StrengthLevel, StrengthScore, ValidationResult,
};
pub use validator::{validate_confirm_password, validate_email, validate_password};

#[cfg(feature = "async")]
pub use submit::{SubmitConfig, SubmitError, Submitter};

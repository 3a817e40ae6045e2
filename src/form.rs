//! Whole-form validation snapshot.

use std::fmt;

use secrecy::SecretString;

use crate::types::FieldError;
use crate::validator::{validate_confirm_password, validate_email, validate_password};

/// A user-editable field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Per-field validation outcome for one pass over the whole form.
///
/// Rebuilt from scratch on every pass, so no field ever keeps a stale
/// error after a successful revalidation. The engine holds no state;
/// callers keep the latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }

    /// The current error for one field, if any.
    pub fn error_for(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Email => self.email,
            FormField::Password => self.password,
            FormField::ConfirmPassword => self.confirm_password,
        }
    }

    /// Non-empty error messages in field order.
    pub fn messages(&self) -> Vec<String> {
        [self.email, self.password, self.confirm_password]
            .iter()
            .flatten()
            .map(|error| error.to_string())
            .collect()
    }

    /// Aggregated text for the submit banner; `None` when the form is
    /// clean.
    pub fn banner_message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(". "))
    }
}

/// Validates all three fields and returns a fresh snapshot.
pub fn validate_form(
    email: &str,
    password: &SecretString,
    confirm_password: &SecretString,
) -> FormErrors {
    FormErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
        confirm_password: validate_confirm_password(password, confirm_password).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    #[serial]
    fn test_valid_form() {
        crate::blacklist::reset_blacklist_for_testing();

        let errors = validate_form(
            "user@example.com",
            &secret("Str0ng!Passw0rd"),
            &secret("Str0ng!Passw0rd"),
        );
        assert!(errors.is_valid());
        assert_eq!(errors.banner_message(), None);
        assert!(errors.messages().is_empty());
    }

    #[test]
    #[serial]
    fn test_all_fields_empty() {
        crate::blacklist::reset_blacklist_for_testing();

        let errors = validate_form("", &secret(""), &secret(""));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
        assert_eq!(
            errors.confirm_password,
            Some(FieldError::ConfirmPasswordRequired)
        );
        assert_eq!(
            errors.banner_message().unwrap(),
            "Email address is required. Password is required. Please confirm your password"
        );
    }

    #[test]
    #[serial]
    fn test_banner_skips_valid_fields() {
        crate::blacklist::reset_blacklist_for_testing();

        let errors = validate_form(
            "user@example.com",
            &secret("short1"),
            &secret("short1"),
        );
        assert_eq!(
            errors.banner_message().unwrap(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    #[serial]
    fn test_revalidation_clears_stale_errors() {
        crate::blacklist::reset_blacklist_for_testing();

        let first = validate_form("bad-email", &secret("short1"), &secret(""));
        assert!(!first.is_valid());

        let second = validate_form(
            "user@example.com",
            &secret("Str0ng!Passw0rd"),
            &secret("Str0ng!Passw0rd"),
        );
        assert!(second.is_valid());
        assert_eq!(second.error_for(FormField::Email), None);
        assert_eq!(second.error_for(FormField::Password), None);
        assert_eq!(second.error_for(FormField::ConfirmPassword), None);
    }

    #[test]
    #[serial]
    fn test_error_for_matches_fields() {
        crate::blacklist::reset_blacklist_for_testing();

        let errors = validate_form("bad-email", &secret("Str0ng!Passw0rd"), &secret("other"));
        assert_eq!(
            errors.error_for(FormField::Email),
            Some(FieldError::EmailFormat)
        );
        assert_eq!(errors.error_for(FormField::Password), None);
        assert_eq!(
            errors.error_for(FormField::ConfirmPassword),
            Some(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormField::Email.as_str(), "email");
        assert_eq!(FormField::Password.as_str(), "password");
        assert_eq!(FormField::ConfirmPassword.as_str(), "confirmPassword");
    }
}

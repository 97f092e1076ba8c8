//! Input validation as plain rule lists.
//!
//! Each rule inspects the request and yields at most one field error. All
//! rules of a list run, so the caller sees every violation at once.

use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::{LoginRequest, RegisterRequest};
use crate::error::FieldError;

pub type Rule<T> = fn(&T) -> Option<FieldError>;

pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex compiles");
    }
    EMAIL_RE.is_match(email)
}

pub fn validate<T>(input: &T, rules: &[Rule<T>]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules.iter().filter_map(|rule| rule(input)).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn name_required(req: &RegisterRequest) -> Option<FieldError> {
    match req.name.as_deref() {
        Some(name) if !name.trim().is_empty() => None,
        _ => Some(FieldError::new("name", "Name is Required")),
    }
}

fn email_valid(email: Option<&str>) -> Option<FieldError> {
    match email {
        Some(email) if is_valid_email(email) => None,
        _ => Some(FieldError::new("email", "Please enter a valid email")),
    }
}

fn register_email_valid(req: &RegisterRequest) -> Option<FieldError> {
    email_valid(req.email.as_deref())
}

fn password_min_length(req: &RegisterRequest) -> Option<FieldError> {
    match req.password.as_deref() {
        Some(pw) if pw.chars().count() >= MIN_PASSWORD_LEN => None,
        _ => Some(FieldError::new(
            "password",
            "Please enter a password with 6 or more characters",
        )),
    }
}

fn login_email_valid(req: &LoginRequest) -> Option<FieldError> {
    email_valid(req.email.as_deref())
}

fn password_required(req: &LoginRequest) -> Option<FieldError> {
    match req.password.as_deref() {
        Some(pw) if !pw.is_empty() => None,
        _ => Some(FieldError::new("password", "Password is required")),
    }
}

pub const REGISTER_RULES: &[Rule<RegisterRequest>] =
    &[name_required, register_email_valid, password_min_length];

pub const LOGIN_RULES: &[Rule<LoginRequest>] = &[login_email_valid, password_required];

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.map(Into::into),
            email: email.map(Into::into),
            password: password.map(Into::into),
        }
    }

    fn params(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().filter_map(|e| e.param.as_deref()).collect()
    }

    #[test]
    fn valid_registration_passes() {
        let req = register(Some("Ann"), Some("ann@example.com"), Some("secret1"));
        assert!(validate(&req, REGISTER_RULES).is_ok());
    }

    #[test]
    fn empty_registration_reports_all_three_fields() {
        let errors = validate(&RegisterRequest::default(), REGISTER_RULES).unwrap_err();
        assert_eq!(params(&errors), vec!["name", "email", "password"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let req = register(Some("   "), Some("ann@example.com"), Some("secret1"));
        let errors = validate(&req, REGISTER_RULES).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Name is Required")]);
    }

    #[test]
    fn short_password_is_rejected_at_five_and_accepted_at_six() {
        let five = register(Some("Ann"), Some("ann@example.com"), Some("12345"));
        assert_eq!(params(&validate(&five, REGISTER_RULES).unwrap_err()), vec!["password"]);

        let six = register(Some("Ann"), Some("ann@example.com"), Some("123456"));
        assert!(validate(&six, REGISTER_RULES).is_ok());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // five two-byte characters
        let req = register(Some("Ann"), Some("ann@example.com"), Some("ééééé"));
        assert!(validate(&req, REGISTER_RULES).is_err());
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann @example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn login_rules_require_email_and_password() {
        let errors = validate(&LoginRequest::default(), LOGIN_RULES).unwrap_err();
        assert_eq!(params(&errors), vec!["email", "password"]);
    }
}

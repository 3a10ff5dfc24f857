use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AppError;
use crate::users::dto::CreateUserRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Validate a creation request before it reaches the store.
/// Pure function of its input; the first failing field wins.
pub(crate) fn validate_create(req: &CreateUserRequest) -> Result<(), AppError> {
    if !is_valid_email(&req.email) {
        return Err(AppError::InvalidInput { field: "email" });
    }
    if req.full_name.trim().is_empty() {
        return Err(AppError::InvalidInput { field: "full_name" });
    }
    if req.password.is_empty() {
        return Err(AppError::InvalidInput { field: "password" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, full_name: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.into(),
            full_name: full_name.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        assert!(validate_create(&req("a@example.com", "A", "p1")).is_ok());
    }

    #[test]
    fn email_needs_local_part_at_and_dotted_domain() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_bad_email_with_field_name() {
        let err = validate_create(&req("not-an-email", "A", "p1")).unwrap_err();
        match err {
            AppError::InvalidInput { field } => assert_eq!(field, "email"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_blank_full_name() {
        let err = validate_create(&req("a@example.com", "   ", "p1")).unwrap_err();
        match err {
            AppError::InvalidInput { field } => assert_eq!(field, "full_name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_password() {
        let err = validate_create(&req("a@example.com", "A", "")).unwrap_err();
        match err {
            AppError::InvalidInput { field } => assert_eq!(field, "password"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Synchronous field checks for the auth forms. Each error's `Display` text
//! is the inline message shown next to the field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

pub const MIN_STUDENT_ID_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both student ID and password")]
    MissingCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StudentIdError {
    #[error("Please enter your student ID")]
    Missing,
    #[error("Student ID must be at least 5 characters")]
    TooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("Please enter your preferred nickname")]
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Please enter your email")]
    Missing,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// Per-field signup errors; every failing field is reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub student_id: Option<StudentIdError>,
    pub nickname: Option<NicknameError>,
    pub email: Option<EmailError>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none() && self.nickname.is_none() && self.email.is_none()
    }
}

pub fn validate_login(student_id: &str, password: &str) -> Result<(), LoginError> {
    if student_id.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}

/// Length is checked on the raw value, emptiness on the trimmed one.
pub fn validate_student_id(student_id: &str) -> Result<(), StudentIdError> {
    if student_id.trim().is_empty() {
        Err(StudentIdError::Missing)
    } else if student_id.chars().count() < MIN_STUDENT_ID_LEN {
        Err(StudentIdError::TooShort)
    } else {
        Ok(())
    }
}

pub fn validate_nickname(nickname: &str) -> Result<(), NicknameError> {
    if nickname.trim().is_empty() {
        return Err(NicknameError::Missing);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.trim().is_empty() {
        Err(EmailError::Missing)
    } else if !EMAIL_PATTERN.is_match(email) {
        Err(EmailError::Malformed)
    } else {
        Ok(())
    }
}

pub fn validate_signup(student_id: &str, nickname: &str, email: &str) -> Result<(), SignupErrors> {
    let errors = SignupErrors {
        student_id: validate_student_id(student_id).err(),
        nickname: validate_nickname(nickname).err(),
        email: validate_email(email).err(),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login() {
        assert!(validate_login("STUD12345", "secret").is_ok());
        assert_eq!(validate_login("", "secret"), Err(LoginError::MissingCredentials));
        assert_eq!(validate_login("STUD12345", "   "), Err(LoginError::MissingCredentials));
    }

    #[test]
    fn test_student_id_rules() {
        assert_eq!(validate_student_id(""), Err(StudentIdError::Missing));
        assert_eq!(validate_student_id("   "), Err(StudentIdError::Missing));
        assert_eq!(validate_student_id("ST12"), Err(StudentIdError::TooShort));
        assert!(validate_student_id("ST123").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("your.email@example.com").is_ok());
        assert_eq!(validate_email(""), Err(EmailError::Missing));
        assert_eq!(validate_email("a@b"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a b@c.de"), Err(EmailError::Malformed));
        assert_eq!(validate_email("@b.co"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a@@b.co"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_signup_reports_every_field() {
        let errors = validate_signup("ST1", "", "nope").unwrap_err();
        assert_eq!(errors.student_id, Some(StudentIdError::TooShort));
        assert_eq!(errors.nickname, Some(NicknameError::Missing));
        assert_eq!(errors.email, Some(EmailError::Malformed));
        assert!(validate_signup("STUD12345", "Alex", "a@b.co").is_ok());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            StudentIdError::TooShort.to_string(),
            "Student ID must be at least 5 characters"
        );
        assert_eq!(EmailError::Malformed.to_string(), "Please enter a valid email address");
    }
}

//! Validation helpers and messages for registration and login

use validator::ValidateEmail;

pub const MSG_MISSING_REGISTER_FIELDS: &str = "Please enter all values";
pub const MSG_MISSING_LOGIN_FIELDS: &str = "Please enter email & Password";
pub const MSG_INVALID_EMAIL: &str = "Please enter valid email address";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Your password must be at least 6 characters long";
pub const MSG_DUPLICATE_EMAIL: &str = "Duplicate email";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid Email or Password";

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Treat absent and empty values alike
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

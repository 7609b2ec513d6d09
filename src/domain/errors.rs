//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number does not have exactly ten characters.
    InvalidPhoneLength(String),

    /// The provided phone number contains something other than digits.
    InvalidPhoneDigits(String),

    /// The provided birthday is not a real date in DD.MM.YYYY form.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhoneLength(_) => write!(f, "Phone number must be exactly 10 digits"),
            Self::InvalidPhoneDigits(_) => write!(f, "Phone number must contain only digits"),
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

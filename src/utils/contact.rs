//! Sign-up contact validation.
//!
//! Input is classified by shape first: anything made only of digits and
//! phone punctuation is a phone number, everything else is treated as an
//! email address.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Digits plus the separators people type in phone numbers.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("valid phone shape regex"));

/// Conventional `local@domain.tld` shape.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Number of digits a phone number must normalize to.
pub const PHONE_DIGITS: usize = 10;

/// A validated contact, as classified by [`validate_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    /// Phone number, normalized to its digits
    Phone(String),
    /// Email address, as entered
    Email(String),
}

impl Contact {
    pub fn kind(&self) -> &'static str {
        match self {
            Contact::Phone(_) => "phone",
            Contact::Email(_) => "email",
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Phone(digits) => write!(f, "+91 {}", digits),
            Contact::Email(email) => f.write_str(email),
        }
    }
}

/// Field-level validation failures. The message is shown inline under the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your phone number or email address")]
    Empty,
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Validate a sign-up contact.
///
/// # Rules
/// - Empty or whitespace-only input is rejected
/// - Phone-shaped input must contain exactly 10 digits once separators
///   (spaces, `-`, `+`, parentheses) are stripped
/// - Any other input must look like `local@domain.tld`
pub fn validate_contact(input: &str) -> Result<Contact, ContactError> {
    if input.trim().is_empty() {
        return Err(ContactError::Empty);
    }

    if PHONE_SHAPE.is_match(input) {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != PHONE_DIGITS {
            return Err(ContactError::InvalidPhone);
        }
        return Ok(Contact::Phone(digits));
    }

    if EMAIL_SHAPE.is_match(input) {
        Ok(Contact::Email(input.to_string()))
    } else {
        Err(ContactError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ten_digit_phone() {
        assert_eq!(
            validate_contact("9876543210"),
            Ok(Contact::Phone("9876543210".to_string()))
        );
    }

    #[test]
    fn test_phone_with_separators() {
        assert_eq!(
            validate_contact("(987) 654-3210"),
            Ok(Contact::Phone("9876543210".to_string()))
        );
    }

    #[test]
    fn test_phone_wrong_length() {
        assert_eq!(validate_contact("12345"), Err(ContactError::InvalidPhone));
        // Country code pushes it past ten digits
        assert_eq!(
            validate_contact("+91 98765 43210"),
            Err(ContactError::InvalidPhone)
        );
    }

    #[test]
    fn test_valid_email() {
        assert_eq!(
            validate_contact("asha@example.in"),
            Ok(Contact::Email("asha@example.in".to_string()))
        );
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_contact("not-an-email"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_contact("a@b"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_contact("a b@c.d"), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_contact(""), Err(ContactError::Empty));
        assert_eq!(validate_contact("   "), Err(ContactError::Empty));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit phone number"
        );
    }
}

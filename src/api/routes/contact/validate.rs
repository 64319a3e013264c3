//! Validation and spam filtering for contact submissions

use regex::Regex;

use super::public::ContactRequest;

/// A submission that passed validation, honeypot stripped
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub fullname: String,
    pub email: String,
    pub message: String,
}

/// Classification of a decoded request body
#[derive(Debug, PartialEq)]
pub enum ValidationResult {
    Valid(ContactSubmission),
    Spam,
    Invalid,
}

/// Shape check only: something@something.something. Deliberately
/// permissive, not a full address validator.
fn is_valid_email(email: &str) -> bool {
    Regex::new(r".+@.+\..+").unwrap().is_match(email)
}

/// Classify a decoded request body. A non-empty honeypot wins over
/// every other field state.
pub fn validate(request: &ContactRequest) -> ValidationResult {
    if request
        .honeypot
        .as_deref()
        .is_some_and(|hp| !hp.is_empty())
    {
        return ValidationResult::Spam;
    }

    let (fullname, email, message) = match (&request.fullname, &request.email, &request.message) {
        (Some(fullname), Some(email), Some(message)) => (fullname, email, message),
        _ => return ValidationResult::Invalid,
    };

    if fullname.is_empty() || email.is_empty() || message.is_empty() || !is_valid_email(email) {
        return ValidationResult::Invalid;
    }

    ValidationResult::Valid(ContactSubmission {
        fullname: fullname.clone(),
        email: email.clone(),
        message: message.clone(),
    })
}

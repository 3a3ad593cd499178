//! Candidate normalization.

use super::candidates::RawCandidate;
use crate::domain::{CanonicalNumber, ValidationError};

/// Reduce a matched candidate to its canonical form.
///
/// # Errors
///
/// Returns `ValidationError::MalformedCandidate` when the candidate's digits
/// are neither a 10-digit local number nor an 11-digit number with a `7` or
/// `8` trunk.
pub fn normalize(candidate: &RawCandidate<'_>) -> Result<CanonicalNumber, ValidationError> {
    normalize_str(candidate.text)
}

/// Reduce any phone-like string to its canonical form.
///
/// Every non-digit character is ignored, so this is idempotent on strings
/// that are already canonical.
///
/// # Example
///
/// ```
/// use phone_extractor::matching::normalize_str;
///
/// let phone = normalize_str("8 (495) 123 45 67").unwrap();
/// assert_eq!(phone.as_str(), "+7(495)123-45-67");
/// assert_eq!(normalize_str(phone.as_str()).unwrap(), phone);
/// ```
pub fn normalize_str(raw: &str) -> Result<CanonicalNumber, ValidationError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('7') || digits.starts_with('8') => &digits[1..],
        _ => return Err(ValidationError::MalformedCandidate(raw.to_string())),
    };

    CanonicalNumber::from_local_digits(local)
}

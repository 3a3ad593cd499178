//! CanonicalNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static CANONICAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+7\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2}$")
        .expect("Failed to compile canonical phone regex")
});

/// A Russian phone number in the canonical `+7(XXX)XXX-XX-XX` form.
///
/// The only way to obtain one is from exactly ten domestic digits, so two
/// values are equal exactly when their digit sequences are equal, no matter
/// how the number was spelled in the source text.
///
/// # Example
///
/// ```
/// use phone_extractor::domain::CanonicalNumber;
///
/// let phone = CanonicalNumber::from_local_digits("9123456789").unwrap();
/// assert_eq!(phone.as_str(), "+7(912)345-67-89");
/// assert_eq!(phone.digits(), "9123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Build a canonical number from the ten digits following the trunk prefix.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MalformedCandidate` unless `digits` is exactly
    /// ten ASCII digits.
    pub fn from_local_digits(digits: &str) -> Result<Self, ValidationError> {
        if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MalformedCandidate(digits.to_string()));
        }

        Ok(Self(format!(
            "+7({}){}-{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..8],
            &digits[8..10]
        )))
    }

    /// Parse a string that is already in canonical form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCanonical` for anything else,
    /// including surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !CANONICAL_REGEX.is_match(value) {
            return Err(ValidationError::InvalidCanonical(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Get the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ten domestic digits, without the `7` trunk.
    pub fn digits(&self) -> String {
        // Skip the "+7" prefix; the rest holds exactly ten digits.
        self.0[2..].chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for CanonicalNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for CanonicalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

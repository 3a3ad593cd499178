//! Ordered, deduplicated collection of canonical numbers.

use crate::domain::CanonicalNumber;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Unique canonical numbers in first-occurrence order.
///
/// Insertion of a number already present is a no-op, so the position of
/// every number is fixed by the first time it was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    numbers: Vec<CanonicalNumber>,
    seen: HashSet<CanonicalNumber>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `number` unless it is already present.
    ///
    /// Returns `true` if the number was new.
    pub fn insert(&mut self, number: CanonicalNumber) -> bool {
        if self.seen.contains(&number) {
            return false;
        }
        self.seen.insert(number.clone());
        self.numbers.push(number);
        true
    }

    /// Append every number of `other` that is not already present, keeping
    /// `other`'s order.
    pub fn merge(&mut self, other: ResultSet) {
        for number in other.numbers {
            self.insert(number);
        }
    }

    /// Merge per-source results in the order given.
    pub fn merge_all(parts: impl IntoIterator<Item = ResultSet>) -> Self {
        let mut merged = Self::new();
        for part in parts {
            merged.merge(part);
        }
        merged
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalNumber> {
        self.numbers.iter()
    }

    /// The canonical literals, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.numbers.iter().map(|n| n.as_str().to_string()).collect()
    }
}

impl Extend<CanonicalNumber> for ResultSet {
    fn extend<I: IntoIterator<Item = CanonicalNumber>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}

impl FromIterator<CanonicalNumber> for ResultSet {
    fn from_iter<I: IntoIterator<Item = CanonicalNumber>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CanonicalNumber;
    type IntoIter = std::slice::Iter<'a, CanonicalNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

// Serialized as a plain array of canonical strings.
impl Serialize for ResultSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.numbers.serialize(serializer)
    }
}

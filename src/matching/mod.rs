//! Phone-number recognition and normalization.
//!
//! `candidates` finds substrings that look like Russian phone numbers and
//! `normalizer` rewrites each one into a [`CanonicalNumber`](crate::domain::CanonicalNumber).

pub mod candidates;
pub mod normalizer;

pub use candidates::{find_candidates, Candidates, RawCandidate};
pub use normalizer::{normalize, normalize_str};

//! Domain value objects and types.
//!
//! `CanonicalNumber` is the only representation of a phone number that leaves
//! the extraction pipeline. It is validated at construction time, so an
//! invalid spelling can never end up in a result set.

pub mod canonical;
pub mod errors;

pub use canonical::CanonicalNumber;
pub use errors::ValidationError;

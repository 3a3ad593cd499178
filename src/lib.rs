//! Phone Extractor - finds Russian phone numbers in free-form text.
//!
//! Every number is rewritten to the canonical `+7(XXX)XXX-XX-XX` form, so the
//! same number spelled as `8 (912) 345-67-89` or `+79123456789` is reported
//! once, at the position where it first appeared.
//!
//! # Architecture
//!
//! - **matching**: candidate recognition and normalization
//! - **domain**: the `CanonicalNumber` value object
//! - **aggregate**: ordered, deduplicated result sets and multi-text merging
//! - **sources**: text sources and the concurrent multi-file pipeline
//! - **output**: line rendering and file output
//! - **config**: configuration from environment variables
//! - **error**: error types for I/O and configuration
//! - **observability**: run metrics
//!
//! # Example
//!
//! ```
//! use phone_extractor::process_one;
//!
//! let text = "Связаться с нами можно по телефону +7 912-345-67-89 или 8 (495) 123 45 67.";
//! assert_eq!(
//!     process_one(text).to_strings(),
//!     vec!["+7(912)345-67-89", "+7(495)123-45-67"]
//! );
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod observability;
pub mod output;
pub mod sources;

pub use aggregate::{process_many, process_one, ResultSet};
pub use config::{Config, UnreadablePolicy};
pub use domain::{CanonicalNumber, ValidationError};
pub use error::{ConfigError, SourceError};
pub use matching::{find_candidates, normalize, normalize_str, RawCandidate};
pub use observability::{ExtractionMetrics, Timer};
pub use sources::{Extractor, FileSource, InMemorySource, StdinSource, TextSource};

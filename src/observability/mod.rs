//! Observability module for run metrics.
//!
//! Logging itself goes through `tracing`; this module only keeps counters
//! and timings that are summarized at the end of a run.

pub mod metrics;

pub use metrics::{ExtractionMetrics, Timer};

//! Extraction metrics.
//!
//! Counters for one extraction run: how many sources were read, how many
//! candidates the matcher produced, and what happened to them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for an extraction run.
///
/// Cloning is cheap and every clone updates the same counters, so one tracker
/// can be handed to each concurrent source pipeline.
#[derive(Debug, Clone)]
pub struct ExtractionMetrics {
    sources_loaded_total: Arc<AtomicU64>,
    sources_failed_total: Arc<AtomicU64>,
    candidates_total: Arc<AtomicU64>,
    malformed_total: Arc<AtomicU64>,
    numbers_emitted_total: Arc<AtomicU64>,
}

impl ExtractionMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            sources_loaded_total: Arc::new(AtomicU64::new(0)),
            sources_failed_total: Arc::new(AtomicU64::new(0)),
            candidates_total: Arc::new(AtomicU64::new(0)),
            malformed_total: Arc::new(AtomicU64::new(0)),
            numbers_emitted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a source load attempt.
    pub fn track_source(&self, source: &str, success: bool) {
        if success {
            self.sources_loaded_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(source = %source, "Source loaded");
        } else {
            self.sources_failed_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(source = %source, "Source failed");
        }
    }

    /// Track one matched candidate and whether it normalized.
    pub fn track_candidate(&self, normalized: bool) {
        self.candidates_total.fetch_add(1, Ordering::Relaxed);
        if !normalized {
            self.malformed_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Track the size of the final merged result.
    pub fn track_emitted(&self, count: usize) {
        self.numbers_emitted_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn sources_loaded_total(&self) -> u64 {
        self.sources_loaded_total.load(Ordering::Relaxed)
    }

    pub fn sources_failed_total(&self) -> u64 {
        self.sources_failed_total.load(Ordering::Relaxed)
    }

    pub fn candidates_total(&self) -> u64 {
        self.candidates_total.load(Ordering::Relaxed)
    }

    pub fn malformed_total(&self) -> u64 {
        self.malformed_total.load(Ordering::Relaxed)
    }

    pub fn numbers_emitted_total(&self) -> u64 {
        self.numbers_emitted_total.load(Ordering::Relaxed)
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Extraction Summary:\n\
             Sources Loaded: {}\n\
             Sources Failed: {}\n\
             Candidates: {}\n\
             Malformed: {}\n\
             Numbers Emitted: {}",
            self.sources_loaded_total(),
            self.sources_failed_total(),
            self.candidates_total(),
            self.malformed_total(),
            self.numbers_emitted_total(),
        )
    }
}

impl Default for ExtractionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = ExtractionMetrics::new();
        assert_eq!(metrics.sources_loaded_total(), 0);
        assert_eq!(metrics.sources_failed_total(), 0);
        assert_eq!(metrics.candidates_total(), 0);
        assert_eq!(metrics.malformed_total(), 0);
        assert_eq!(metrics.numbers_emitted_total(), 0);
    }

    #[test]
    fn test_track_source() {
        let metrics = ExtractionMetrics::new();

        metrics.track_source("a.txt", true);
        metrics.track_source("missing.txt", false);

        assert_eq!(metrics.sources_loaded_total(), 1);
        assert_eq!(metrics.sources_failed_total(), 1);
    }

    #[test]
    fn test_track_candidate() {
        let metrics = ExtractionMetrics::new();

        metrics.track_candidate(true);
        metrics.track_candidate(false);
        metrics.track_candidate(true);

        assert_eq!(metrics.candidates_total(), 3);
        assert_eq!(metrics.malformed_total(), 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = ExtractionMetrics::new();
        let clone = metrics.clone();

        clone.track_emitted(4);
        assert_eq!(metrics.numbers_emitted_total(), 4);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        let duration = timer.finish();
        assert!(duration >= 10);
    }

    #[test]
    fn test_summary() {
        let metrics = ExtractionMetrics::new();
        metrics.track_source("a.txt", true);
        metrics.track_candidate(true);

        let summary = metrics.summary();
        assert!(summary.contains("Sources Loaded: 1"));
        assert!(summary.contains("Candidates: 1"));
    }
}

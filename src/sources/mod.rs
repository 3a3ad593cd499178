//! Text sources and the concurrent extraction pipeline.
//!
//! A [`TextSource`] hands over a fully decoded text; the [`Extractor`] loads
//! any number of sources concurrently, runs the matcher on each loaded text
//! and merges the per-source results in the order the sources were given.

use crate::aggregate::{process_one_tracked, ResultSet};
use crate::config::{Config, UnreadablePolicy};
use crate::error::{SourceError, SourceResult};
use crate::observability::ExtractionMetrics;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Something that can produce a text to scan.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> String;

    /// Load the full text.
    async fn load(&self) -> SourceResult<String>;
}

/// A UTF-8 text file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> SourceResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Everything written to standard input until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl TextSource for StdinSource {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    async fn load(&self) -> SourceResult<String> {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(SourceError::Stdin)?;
        Ok(text)
    }
}

/// A text that is already in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    text: String,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl TextSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn load(&self) -> SourceResult<String> {
        Ok(self.text.clone())
    }
}

/// Runs extraction over one or many sources.
#[derive(Debug, Clone)]
pub struct Extractor {
    max_concurrent_reads: usize,
    on_unreadable: UnreadablePolicy,
    metrics: ExtractionMetrics,
}

impl Extractor {
    /// Create an extractor from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            max_concurrent_reads: config.max_concurrent_reads.max(1),
            on_unreadable: config.on_unreadable,
            metrics: ExtractionMetrics::new(),
        }
    }

    /// Counters accumulated by every run of this extractor.
    pub fn metrics(&self) -> &ExtractionMetrics {
        &self.metrics
    }

    /// Extract the numbers of a single source.
    ///
    /// A load failure is always returned as an error here; the unreadable
    /// policy only applies to multi-source runs.
    pub async fn extract_source(&self, source: &dyn TextSource) -> SourceResult<ResultSet> {
        let name = source.name();
        let text = source.load().await.inspect_err(|_| {
            self.metrics.track_source(&name, false);
        })?;
        self.metrics.track_source(&name, true);

        let set = self.scan(name, text).await?;
        self.metrics.track_emitted(set.len());
        Ok(set)
    }

    /// Extract from many sources and merge, earliest source first.
    ///
    /// Up to `max_concurrent_reads` sources are loaded and scanned at a time.
    /// Their results are reassembled in input order regardless of which
    /// finishes first, and merged only once all of them are done.
    pub async fn extract_sources(
        &self,
        sources: Vec<Arc<dyn TextSource>>,
    ) -> SourceResult<ResultSet> {
        let parts: Vec<ResultSet> = stream::iter(sources)
            .map(|source| async move { self.extract_part(source.as_ref()).await })
            .buffered(self.max_concurrent_reads)
            .try_collect()
            .await?;

        let merged = ResultSet::merge_all(parts);
        self.metrics.track_emitted(merged.len());
        Ok(merged)
    }

    /// Convenience wrapper over [`Extractor::extract_sources`] for file paths.
    pub async fn extract_files<P: AsRef<Path>>(&self, paths: &[P]) -> SourceResult<ResultSet> {
        let sources = paths
            .iter()
            .map(|p| Arc::new(FileSource::new(p.as_ref())) as Arc<dyn TextSource>)
            .collect();
        self.extract_sources(sources).await
    }

    /// Load and scan one source of a multi-source run.
    async fn extract_part(&self, source: &dyn TextSource) -> SourceResult<ResultSet> {
        let name = source.name();

        match source.load().await {
            Ok(text) => {
                self.metrics.track_source(&name, true);
                self.scan(name, text).await
            }
            Err(e) => {
                self.metrics.track_source(&name, false);
                match self.on_unreadable {
                    UnreadablePolicy::Skip => {
                        tracing::error!("Skipping {}: {}", name, e);
                        Ok(ResultSet::new())
                    }
                    UnreadablePolicy::Abort => Err(e),
                }
            }
        }
    }

    /// Run the matcher on a loaded text off the async worker threads.
    async fn scan(&self, name: String, text: String) -> SourceResult<ResultSet> {
        let metrics = self.metrics.clone();

        let set = tokio::task::spawn_blocking(move || process_one_tracked(&text, &metrics))
            .await
            .map_err(|e| SourceError::Join(e.to_string()))?;

        tracing::debug!(source = %name, numbers = set.len(), "Source scanned");
        Ok(set)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MissingSource;

    #[async_trait]
    impl TextSource for MissingSource {
        fn name(&self) -> String {
            "missing".to_string()
        }

        async fn load(&self) -> SourceResult<String> {
            Err(SourceError::Read {
                path: PathBuf::from("missing"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    fn memory(name: &str, text: &str) -> Arc<dyn TextSource> {
        Arc::new(InMemorySource::new(name, text))
    }

    fn missing() -> Arc<dyn TextSource> {
        Arc::new(MissingSource)
    }

    #[tokio::test]
    async fn test_extract_source_in_memory() {
        let extractor = Extractor::default();
        let source = InMemorySource::new("memo", "+7 912-345-67-89 / 8 (495) 123 45 67");

        let set = extractor.extract_source(&source).await.unwrap();
        assert_eq!(set.to_strings(), vec!["+7(912)345-67-89", "+7(495)123-45-67"]);
        assert_eq!(extractor.metrics().sources_loaded_total(), 1);
    }

    #[tokio::test]
    async fn test_extract_sources_merges_in_input_order() {
        let extractor = Extractor::default();
        let set = extractor
            .extract_sources(vec![
                memory("a", "8 912 000 00 01"),
                memory("b", "+7 912 000 00 02, +7 912 000 00 01"),
            ])
            .await
            .unwrap();

        assert_eq!(set.to_strings(), vec!["+7(912)000-00-01", "+7(912)000-00-02"]);
        assert_eq!(extractor.metrics().numbers_emitted_total(), 2);
    }

    #[tokio::test]
    async fn test_skip_policy_treats_failure_as_empty() {
        let extractor = Extractor::default();
        let set = extractor
            .extract_sources(vec![missing(), memory("b", "89120000001")])
            .await
            .unwrap();

        assert_eq!(set.to_strings(), vec!["+7(912)000-00-01"]);
        assert_eq!(extractor.metrics().sources_failed_total(), 1);
    }

    #[tokio::test]
    async fn test_abort_policy_fails_run() {
        let config = Config {
            on_unreadable: UnreadablePolicy::Abort,
            ..Config::default()
        };
        let extractor = Extractor::new(&config);
        let result = extractor
            .extract_sources(vec![memory("a", "89120000001"), missing()])
            .await;

        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[tokio::test]
    async fn test_extract_source_propagates_load_error() {
        let extractor = Extractor::default();
        assert!(extractor.extract_source(&MissingSource).await.is_err());
    }
}

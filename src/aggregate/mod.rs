//! Aggregation of normalized numbers into result sets.
//!
//! Every text is reduced on its own to a [`ResultSet`]; several result sets
//! are then merged in the order their sources were supplied. Texts are never
//! glued together, so a number cannot be formed across a source boundary.

pub mod result_set;

pub use result_set::ResultSet;

use crate::matching::{find_candidates, normalize};
use crate::observability::ExtractionMetrics;

/// Extract the unique canonical numbers of one text, in order of appearance.
///
/// # Example
///
/// ```
/// use phone_extractor::aggregate::process_one;
///
/// let set = process_one("+79123456789 and 8(912)345-67-89");
/// assert_eq!(set.to_strings(), vec!["+7(912)345-67-89"]);
/// ```
pub fn process_one(text: &str) -> ResultSet {
    collect(text, None)
}

/// Like [`process_one`], also feeding candidate counts into `metrics`.
pub fn process_one_tracked(text: &str, metrics: &ExtractionMetrics) -> ResultSet {
    collect(text, Some(metrics))
}

/// Extract from several texts and merge them, earliest source first.
///
/// The result equals running [`process_one`] on each text and keeping the
/// first occurrence of every number across the sequence.
pub fn process_many<I, S>(texts: I) -> ResultSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<ResultSet> = texts
        .into_iter()
        .map(|text| process_one(text.as_ref()))
        .collect();
    ResultSet::merge_all(parts)
}

fn collect(text: &str, metrics: Option<&ExtractionMetrics>) -> ResultSet {
    let mut set = ResultSet::new();

    for candidate in find_candidates(text) {
        let normalized = normalize(&candidate);
        if let Some(metrics) = metrics {
            metrics.track_candidate(normalized.is_ok());
        }

        match normalized {
            Ok(number) => {
                set.insert(number);
            }
            Err(e) => {
                tracing::trace!(offset = candidate.start, error = %e, "Dropping candidate");
            }
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_one_empty_text() {
        assert!(process_one("").is_empty());
        assert!(process_one("nothing to see here").is_empty());
    }

    #[test]
    fn test_process_one_orders_by_first_occurrence() {
        let set = process_one("84951234567, +7 912 345 67 89, 8 (495) 123-45-67");
        assert_eq!(set.to_strings(), vec!["+7(495)123-45-67", "+7(912)345-67-89"]);
    }

    #[test]
    fn test_process_many_earliest_source_wins() {
        let set = process_many(["8 912 000 00 01", "+7 912 000 00 01"]);
        assert_eq!(set.to_strings(), vec!["+7(912)000-00-01"]);
    }

    #[test]
    fn test_process_many_does_not_join_sources() {
        // "+7 912 345" and "67 89" would form a number if concatenated.
        let set = process_many(["+7 912 345", "67 89"]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_process_one_tracked_counts_candidates() {
        let metrics = ExtractionMetrics::new();
        let set = process_one_tracked("+79123456789 and 89123456789", &metrics);

        assert_eq!(set.len(), 1);
        assert_eq!(metrics.candidates_total(), 2);
        assert_eq!(metrics.malformed_total(), 0);
    }
}

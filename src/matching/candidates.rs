//! Candidate recognition.
//!
//! Scans free-form text for substrings shaped like Russian phone numbers.
//! Each start position is tried against a small set of anchored patterns in
//! priority order; the first one that matches with a clean right edge wins
//! and scanning resumes after it. The `regex` crate has no look-around, so the
//! digit-boundary rules live in [`Candidates`] rather than in the patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator class tolerated between the prefix and the digits and between
/// the digits themselves.
const SEPARATORS: &str = r#"[\s\-.()"]"#;

/// `+7` or `8`, then ten digits with separators in between.
static PREFIXED_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\A(?:\+7|8){sep}*(?:[0-9]{sep}*){{9}}[0-9]", sep = SEPARATORS);
    Regex::new(&pattern).expect("Failed to compile prefixed phone regex")
});

/// A bare `7` or `8` trunk glued to ten digits.
static CONTIGUOUS_TRUNK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[78][0-9]{10}").expect("Failed to compile trunk phone regex")
});

/// Ten digits with no prefix at all.
static CONTIGUOUS_LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[0-9]{10}").expect("Failed to compile local phone regex")
});

/// A substring of the scanned text that looks like a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCandidate<'a> {
    /// Byte offset of the first character in the scanned text.
    pub start: usize,

    /// The matched text, including prefix and separators.
    pub text: &'a str,
}

impl<'a> RawCandidate<'a> {
    /// Byte offset just past the last character.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Lazy iterator over the phone-number candidates of a text.
///
/// Candidates come out left to right and never overlap. Calling
/// [`find_candidates`] again restarts the scan from the beginning.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for phone-number candidates.
///
/// # Example
///
/// ```
/// use phone_extractor::matching::find_candidates;
///
/// let found: Vec<_> = find_candidates("tel: 8 (495) 123 45 67.")
///     .map(|c| c.text)
///     .collect();
/// assert_eq!(found, vec!["8 (495) 123 45 67"]);
/// ```
pub fn find_candidates(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

impl<'a> Candidates<'a> {
    /// Try every shape anchored at `start`, in priority order.
    fn match_at(&self, start: usize) -> Option<RawCandidate<'a>> {
        let text: &'a str = self.text;
        let rest = &text[start..];

        [
            &*PREFIXED_REGEX,
            &*CONTIGUOUS_TRUNK_REGEX,
            &*CONTIGUOUS_LOCAL_REGEX,
        ]
        .iter()
        .filter_map(|re| re.find(rest))
        .find(|m| !starts_with_ascii_digit(&rest[m.end()..]))
        .map(|m| RawCandidate {
            start,
            text: m.as_str(),
        })
    }

    /// Whether a candidate may begin at `start`.
    ///
    /// A digit right after another digit or a `+` is inside a number that was
    /// already tried (and rejected) from its real beginning. An explicit `+`
    /// always opens a new number, whatever precedes it.
    fn can_start_at(&self, start: usize) -> bool {
        let Some(first) = self.text[start..].chars().next() else {
            return false;
        };
        if first == '+' {
            return true;
        }
        if !first.is_ascii_digit() {
            return false;
        }
        !matches!(
            self.text[..start].chars().next_back(),
            Some(prev) if prev.is_ascii_digit() || prev == '+'
        )
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = RawCandidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let start = self.pos;

            if self.can_start_at(start) {
                if let Some(candidate) = self.match_at(start) {
                    self.pos = candidate.end();
                    return Some(candidate);
                }
            }

            // Advance one character, staying on a UTF-8 boundary.
            let step = self.text[start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            self.pos = start + step;
        }

        None
    }
}

fn starts_with_ascii_digit(s: &str) -> bool {
    s.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

//! Password list loading utilities
//!
//! Provides functions to load candidate lists from files, inline text or the
//! built-in list, enforcing the one-length rule the engine relies on.

use super::DEFAULT_PASSWORDS;
use crate::core::Candidate;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Error type for candidate list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read password list: {0}")]
    Io(#[from] io::Error),
    #[error("password list is empty")]
    Empty,
    #[error("'{word}' has {found} letters, other passwords have {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
}

/// Accumulates candidates one entry at a time
///
/// The first accepted entry fixes the length; later entries of another length
/// are rejected, blank entries and repeats are skipped.
#[derive(Debug, Default)]
pub struct CandidateCollector {
    candidates: Vec<Candidate>,
    seen: FxHashSet<String>,
}

impl CandidateCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length every entry must have, once the first one is accepted
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.candidates.first().map(Candidate::len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Offer one entry
    ///
    /// Returns `Ok(true)` if it was added and `Ok(false)` if it was blank or
    /// already present.
    ///
    /// # Errors
    /// Returns `LoadError::LengthMismatch` if the entry's length differs from
    /// the first entry's.
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::wordlists::loader::CandidateCollector;
    ///
    /// let mut collector = CandidateCollector::new();
    /// assert!(collector.push("bird").unwrap());
    /// assert!(!collector.push("bird").unwrap());
    /// assert!(collector.push("horse").is_err());
    /// assert_eq!(collector.finish().len(), 1);
    /// ```
    pub fn push(&mut self, entry: &str) -> Result<bool, LoadError> {
        let word = entry.trim();
        if word.is_empty() {
            return Ok(false);
        }

        let candidate = Candidate::new(word);
        if let Some(expected) = self.expected_len()
            && candidate.len() != expected
        {
            return Err(LoadError::LengthMismatch {
                word: word.to_string(),
                expected,
                found: candidate.len(),
            });
        }

        if !self.seen.insert(word.to_string()) {
            warn!(word, "duplicate password skipped");
            return Ok(false);
        }

        self.candidates.push(candidate);
        Ok(true)
    }

    /// The accepted candidates, in entry order
    #[must_use]
    pub fn finish(self) -> Vec<Candidate> {
        self.candidates
    }
}

/// Collect candidates from a sequence of entries
///
/// # Errors
/// Returns `LoadError::LengthMismatch` on the first entry of the wrong length,
/// or `LoadError::Empty` if no entry survives.
pub fn collect_candidates<I, S>(entries: I) -> Result<Vec<Candidate>, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = CandidateCollector::new();
    for entry in entries {
        collector.push(entry.as_ref())?;
    }

    if collector.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(collector.finish())
}

/// Load candidates from a file with one password per line
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read, is empty, or mixes
/// password lengths.
///
/// # Examples
/// ```no_run
/// use likeness_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("passwords.txt").unwrap();
/// println!("Loaded {} passwords", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, LoadError> {
    let content = fs::read_to_string(path)?;
    collect_candidates(content.lines())
}

/// Convert the built-in string slice to candidates
///
/// # Examples
/// ```
/// use likeness_solver::wordlists::DEFAULT_PASSWORDS;
/// use likeness_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(DEFAULT_PASSWORDS);
/// assert_eq!(words.len(), DEFAULT_PASSWORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Candidate> {
    slice.iter().copied().map(Candidate::from).collect()
}

/// Resolve the `--words` option
///
/// - `"default"`: the built-in list
/// - an existing file path: one password per line
/// - anything else: a comma-separated list of passwords
///
/// # Errors
/// Returns a `LoadError` if the list cannot be read or is invalid.
pub fn load_words(source: &str) -> Result<Vec<Candidate>, LoadError> {
    if source == "default" {
        return Ok(words_from_slice(DEFAULT_PASSWORDS));
    }

    let path = Path::new(source);
    if path.is_file() {
        return load_from_file(path);
    }

    collect_candidates(source.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["bird", "fish", "lion"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "bird");
        assert_eq!(words[1].text(), "fish");
        assert_eq!(words[2].text(), "lion");
    }

    #[test]
    fn collect_skips_blank_and_duplicates() {
        let words = collect_candidates(["bird", "", "  fish ", "bird", "lion"]).unwrap();
        let texts: Vec<&str> = words.iter().map(Candidate::text).collect();
        assert_eq!(texts, ["bird", "fish", "lion"]);
    }

    #[test]
    fn collect_rejects_mixed_lengths() {
        let result = collect_candidates(["bird", "horse"]);
        assert!(matches!(
            result,
            Err(LoadError::LengthMismatch {
                expected: 4,
                found: 5,
                ..
            })
        ));
    }

    #[test]
    fn collect_rejects_empty() {
        assert!(matches!(
            collect_candidates(["", "  "]),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn load_words_default() {
        let words = load_words("default").unwrap();
        assert_eq!(words.len(), DEFAULT_PASSWORDS.len());
    }

    #[test]
    fn load_words_inline() {
        let words = load_words("bird, fish,lion").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "fish");
    }

    #[test]
    fn load_words_from_file() {
        let path = std::env::temp_dir().join(format!(
            "likeness_solver_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "seal\nbull\n\nseal\n").unwrap();

        let words = load_words(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "seal");
    }

    #[test]
    fn load_from_missing_file() {
        assert!(matches!(
            load_from_file("/definitely/not/here.txt"),
            Err(LoadError::Io(_))
        ));
    }
}

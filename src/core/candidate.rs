//! Candidate password representation
//!
//! A Candidate is one word that could still be the secret. Its length is
//! measured in characters so that non-ASCII terminals compare correctly.

use std::fmt;

/// One possible secret password
///
/// Candidates are opaque tokens: comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
    len: usize,
}

impl Candidate {
    /// Create a candidate from any string-like value
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::core::Candidate;
    ///
    /// let candidate = Candidate::new("answer");
    /// assert_eq!(candidate.text(), "answer");
    /// assert_eq!(candidate.len(), 6);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }

    /// Get the candidate as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the candidate
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl PartialEq<str> for Candidate {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//! Candidate analysis command
//!
//! Scores every candidate as the next attempt.

use crate::core::Candidate;
use crate::solver::{CandidateEngine, EngineError};

/// One candidate's score
pub struct AnalysisRow {
    pub word: String,
    pub worst_case: usize,
    pub diversity: usize,
    pub expected_remaining: f64,
}

/// Result of analyzing a candidate list
pub struct AnalysisResult {
    /// Rows in selection order; the first one is the suggestion
    pub rows: Vec<AnalysisRow>,
    pub total_candidates: usize,
    pub word_length: Option<usize>,
}

impl AnalysisResult {
    /// The password minimax would try first
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.rows.first().map(|row| row.word.as_str())
    }
}

/// Analyze how well each candidate splits the others
///
/// # Errors
///
/// Returns an error if the candidates differ in length.
pub fn analyze_candidates(candidates: &[Candidate]) -> Result<AnalysisResult, EngineError> {
    let engine = CandidateEngine::new(candidates.iter().cloned())?;

    let rows = engine
        .rank()
        .into_iter()
        .map(|score| AnalysisRow {
            word: engine.candidates()[score.index].text().to_string(),
            worst_case: score.worst_case,
            diversity: score.diversity,
            expected_remaining: score.expected_remaining,
        })
        .collect();

    Ok(AnalysisResult {
        rows,
        total_candidates: engine.len(),
        word_length: engine.word_length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_PASSWORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_orders_by_worst_case() {
        let candidates = words_from_slice(&["bird", "fish", "lion", "seal", "bull"]);
        let result = analyze_candidates(&candidates).unwrap();

        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.word_length, Some(4));
        assert_eq!(result.suggestion(), Some("fish"));
        assert!(
            result
                .rows
                .windows(2)
                .all(|pair| pair[0].worst_case <= pair[1].worst_case)
        );
    }

    #[test]
    fn analyze_properties() {
        let candidates = words_from_slice(DEFAULT_PASSWORDS);
        let result = analyze_candidates(&candidates).unwrap();

        assert_eq!(result.rows.len(), DEFAULT_PASSWORDS.len());
        for row in &result.rows {
            assert!(row.worst_case >= 1);
            assert!(row.worst_case < DEFAULT_PASSWORDS.len());
            assert!(row.diversity >= 1);
            assert!(row.expected_remaining <= row.worst_case as f64);
        }
    }

    #[test]
    fn analyze_empty_list() {
        let result = analyze_candidates(&[]).unwrap();
        assert!(result.rows.is_empty());
        assert_eq!(result.suggestion(), None);
    }
}

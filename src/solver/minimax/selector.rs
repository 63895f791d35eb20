//! Minimax-based guess selection
//!
//! Always selects the candidate that minimizes the worst-case number of
//! survivors, preferring a wider feedback spread on ties.

use super::calculator::{GuessScore, score_guess};
use crate::solver::LikenessMatrix;
use rayon::prelude::*;

/// Select the best guess among the current candidates
///
/// Returns the winning score, or `None` if the matrix is empty. Ties on worst
/// case go to the higher diversity, then to the earliest candidate.
///
/// # Examples
/// ```
/// use likeness_solver::core::Candidate;
/// use likeness_solver::solver::LikenessMatrix;
/// use likeness_solver::solver::minimax::select_best_guess;
///
/// let candidates: Vec<Candidate> = ["bird", "fish", "lion", "seal", "bull"]
///     .into_iter()
///     .map(Candidate::from)
///     .collect();
/// let matrix = LikenessMatrix::build(&candidates).unwrap();
///
/// let best = select_best_guess(&matrix).unwrap();
/// assert_eq!(candidates[best.index].text(), "fish");
/// assert_eq!(best.worst_case, 2);
/// ```
#[must_use]
pub fn select_best_guess(matrix: &LikenessMatrix) -> Option<GuessScore> {
    (0..matrix.len())
        .into_par_iter()
        .map(|guess| score_guess(matrix, guess))
        .min_by_key(GuessScore::selection_key)
}

/// Score every candidate, best guess first
#[must_use]
pub fn rank_guesses(matrix: &LikenessMatrix) -> Vec<GuessScore> {
    let mut scores: Vec<GuessScore> = (0..matrix.len())
        .into_par_iter()
        .map(|guess| score_guess(matrix, guess))
        .collect();

    scores.sort_unstable_by_key(GuessScore::selection_key);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Candidate;

    fn candidates_of(words: &[&str]) -> Vec<Candidate> {
        words.iter().copied().map(Candidate::from).collect()
    }

    #[test]
    fn selects_lowest_worst_case() {
        // aabb leaves two candidates behind likeness 2 and 3, bbbb splits all four
        let candidates = candidates_of(&["aabb", "bbbb", "aaaa", "aaab", "abbb"]);
        let matrix = LikenessMatrix::build(&candidates).unwrap();

        let best = select_best_guess(&matrix).unwrap();

        assert_eq!(candidates[best.index].text(), "bbbb");
        assert_eq!(best.worst_case, 1);
        assert_eq!(best.diversity, 4);
    }

    #[test]
    fn tie_on_worst_case_prefers_diversity() {
        // aaa: {0: bbb ccc, 1: abb acc} -> worst 2, two values
        // abb: {0: ccc, 1: aaa acc, 2: bbb} -> worst 2, three values
        let candidates = candidates_of(&["aaa", "bbb", "ccc", "abb", "acc"]);
        let matrix = LikenessMatrix::build(&candidates).unwrap();

        let best = select_best_guess(&matrix).unwrap();

        assert_eq!(candidates[best.index].text(), "abb");
        assert_eq!(best.worst_case, 2);
        assert_eq!(best.diversity, 3);
    }

    #[test]
    fn full_tie_resolved_by_list_order() {
        // Every word shares nothing with every other word
        let candidates = candidates_of(&["aaa", "bbb", "ccc", "ddd"]);
        let matrix = LikenessMatrix::build(&candidates).unwrap();

        for _ in 0..5 {
            let best = select_best_guess(&matrix).unwrap();
            assert_eq!(best.index, 0);
        }
    }

    #[test]
    fn returns_none_on_empty_matrix() {
        let matrix = LikenessMatrix::default();
        assert!(select_best_guess(&matrix).is_none());
        assert!(rank_guesses(&matrix).is_empty());
    }

    #[test]
    fn ranking_starts_with_selection() {
        let candidates = candidates_of(&["bird", "fish", "lion", "seal", "bull"]);
        let matrix = LikenessMatrix::build(&candidates).unwrap();

        let ranking = rank_guesses(&matrix);
        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking[0], select_best_guess(&matrix).unwrap());
        assert!(
            ranking
                .windows(2)
                .all(|pair| pair[0].selection_key() <= pair[1].selection_key())
        );
    }
}

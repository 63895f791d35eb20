//! Worst-case calculation for a single guess
//!
//! Given the likeness matrix and a guess, buckets every other candidate by the
//! feedback it would produce and measures how badly the split can go.

use crate::solver::LikenessMatrix;
use std::cmp::Reverse;

/// How good a candidate is as the next attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    /// Position of the candidate in the current list
    pub index: usize,
    /// Largest number of other candidates sharing one feedback value
    pub worst_case: usize,
    /// Number of distinct feedback values the other candidates produce
    pub diversity: usize,
    /// Average number of other candidates left after the feedback arrives
    pub expected_remaining: f64,
}

impl GuessScore {
    /// Ordering key: smallest worst case, then widest spread, then list order
    #[inline]
    #[must_use]
    pub const fn selection_key(&self) -> (usize, Reverse<usize>, usize) {
        (self.worst_case, Reverse(self.diversity), self.index)
    }
}

/// Count how many other candidates would produce each likeness value
///
/// Index `k` of the result holds the number of candidates `j != guess` with
/// `likeness(guess, j) == k`. The histogram spans `0..=length`.
///
/// # Panics
/// Panics if `guess` is out of range.
///
/// # Examples
/// ```
/// use likeness_solver::core::Candidate;
/// use likeness_solver::solver::LikenessMatrix;
/// use likeness_solver::solver::minimax::likeness_histogram;
///
/// let candidates: Vec<Candidate> = ["bird", "fish", "lion", "seal", "bull"]
///     .into_iter()
///     .map(Candidate::from)
///     .collect();
/// let matrix = LikenessMatrix::build(&candidates).unwrap();
///
/// // bird: seal shares nothing, fish/lion/bull share one letter
/// assert_eq!(likeness_histogram(&matrix, 0), vec![1, 3, 0, 0, 0]);
/// ```
#[must_use]
pub fn likeness_histogram(matrix: &LikenessMatrix, guess: usize) -> Vec<usize> {
    let row = matrix.row(guess);
    let length = row[guess];
    let mut counts = vec![0; length + 1];

    for (j, &value) in row.iter().enumerate() {
        if j != guess {
            counts[value] += 1;
        }
    }

    counts
}

/// Score one candidate as the next guess
///
/// # Panics
/// Panics if `guess` is out of range.
#[must_use]
pub fn score_guess(matrix: &LikenessMatrix, guess: usize) -> GuessScore {
    let counts = likeness_histogram(matrix, guess);

    let worst_case = counts.iter().copied().max().unwrap_or(0);
    let diversity = counts.iter().filter(|&&count| count > 0).count();

    let others: usize = counts.iter().sum();
    let expected_remaining = if others == 0 {
        0.0
    } else {
        counts.iter().map(|&c| (c * c) as f64).sum::<f64>() / others as f64
    };

    GuessScore {
        index: guess,
        worst_case,
        diversity,
        expected_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Candidate;

    fn matrix_of(words: &[&str]) -> LikenessMatrix {
        let candidates: Vec<Candidate> = words.iter().copied().map(Candidate::from).collect();
        LikenessMatrix::build(&candidates).unwrap()
    }

    #[test]
    fn histogram_excludes_self() {
        let matrix = matrix_of(&["bird", "fish", "lion", "seal", "bull"]);
        let counts = likeness_histogram(&matrix, 3); // seal
        assert_eq!(counts.iter().sum::<usize>(), 4);
        assert_eq!(counts[4], 0);
    }

    #[test]
    fn histogram_counts_duplicates_at_full_length() {
        let matrix = matrix_of(&["bird", "bird", "bull"]);
        let counts = likeness_histogram(&matrix, 0);
        assert_eq!(counts, vec![0, 1, 0, 0, 1]);
    }

    #[test]
    fn score_known_values() {
        let matrix = matrix_of(&["bird", "fish", "lion", "seal", "bull"]);

        let bird = score_guess(&matrix, 0);
        assert_eq!(bird.worst_case, 3);
        assert_eq!(bird.diversity, 2);

        let fish = score_guess(&matrix, 1);
        // fish: bird 1, lion 1, seal 0, bull 0
        assert_eq!(fish.worst_case, 2);
        assert_eq!(fish.diversity, 2);
        assert!((fish.expected_remaining - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_perfect_split() {
        // Each other word produces a distinct likeness against "aaa"
        let matrix = matrix_of(&["aaa", "abb", "aab", "bbb"]);
        let score = score_guess(&matrix, 0);

        assert_eq!(score.worst_case, 1);
        assert_eq!(score.diversity, 3);
        assert!((score.expected_remaining - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_single_candidate() {
        let matrix = matrix_of(&["lion"]);
        let score = score_guess(&matrix, 0);

        assert_eq!(score.worst_case, 0);
        assert_eq!(score.diversity, 0);
        assert!(score.expected_remaining.abs() < f64::EPSILON);
    }

    #[test]
    fn selection_key_orders_by_worst_then_diversity_then_index() {
        let a = GuessScore {
            index: 2,
            worst_case: 2,
            diversity: 3,
            expected_remaining: 0.0,
        };
        let b = GuessScore {
            index: 0,
            worst_case: 2,
            diversity: 2,
            expected_remaining: 0.0,
        };
        let c = GuessScore {
            index: 1,
            worst_case: 1,
            diversity: 1,
            expected_remaining: 0.0,
        };
        let d = GuessScore { index: 3, ..a };

        assert!(c.selection_key() < a.selection_key());
        assert!(a.selection_key() < b.selection_key());
        assert!(a.selection_key() < d.selection_key());
    }
}

//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::LikenessMatrix;
use super::minimax::select_best_guess;
use rand::Rng;

/// A strategy for picking the next attempt among the remaining candidates
pub trait Strategy {
    /// Select the position of the next guess in the current candidate list
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess(&self, matrix: &LikenessMatrix) -> Option<usize>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Minimax with diversity tie-break (default)
    Minimax(MinimaxStrategy),
    /// Uniformly random candidate, used as a baseline
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, matrix: &LikenessMatrix) -> Option<usize> {
        match self {
            Self::Minimax(s) => s.select_guess(matrix),
            Self::Random(s) => s.select_guess(matrix),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    /// Short name for reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Minimax strategy
///
/// Selects the guess that minimizes the worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, matrix: &LikenessMatrix) -> Option<usize> {
        select_best_guess(matrix).map(|score| score.index)
    }
}

/// Random strategy
///
/// Picks any remaining candidate. Useful to measure what minimax buys.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, matrix: &LikenessMatrix) -> Option<usize> {
        if matrix.is_empty() {
            return None;
        }
        Some(rand::rng().random_range(0..matrix.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Candidate;

    fn animal_matrix() -> LikenessMatrix {
        let candidates: Vec<Candidate> = ["bird", "fish", "lion", "seal", "bull"]
            .into_iter()
            .map(Candidate::from)
            .collect();
        LikenessMatrix::build(&candidates).unwrap()
    }

    #[test]
    fn minimax_strategy_selects_fish() {
        let matrix = animal_matrix();
        assert_eq!(MinimaxStrategy.select_guess(&matrix), Some(1));
    }

    #[test]
    fn random_strategy_stays_in_range() {
        let matrix = animal_matrix();
        for _ in 0..50 {
            let guess = RandomStrategy.select_guess(&matrix).unwrap();
            assert!(guess < matrix.len());
        }
    }

    #[test]
    fn strategies_return_none_when_empty() {
        let matrix = LikenessMatrix::default();
        assert!(MinimaxStrategy.select_guess(&matrix).is_none());
        assert!(RandomStrategy.select_guess(&matrix).is_none());
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("unknown").name(), "minimax");
    }
}

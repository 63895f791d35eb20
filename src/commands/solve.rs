//! Password solving command
//!
//! Plays a full round against a known secret and returns the solution path.

use crate::core::{Candidate, likeness};
use crate::solver::{CandidateEngine, EngineError, Strategy};
use tracing::debug;

/// Configuration for solving a password
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// No attempt limit: every wrong attempt eliminates at least itself
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: usize::MAX,
        }
    }
}

/// Result of solving a password
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

/// A single attempt in the solution
pub struct GuessStep {
    pub word: String,
    pub likeness: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst case the strategy accepted, when a choice was made
    pub worst_case: Option<usize>,
}

/// Solve a specific secret using the given strategy
///
/// Each turn asks the engine for a guess, scores it against the secret and
/// feeds the likeness back, until the guess is the secret.
///
/// # Errors
///
/// Returns an error if:
/// - The candidates differ in length
/// - The secret is not one of the candidates
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    candidates: &[Candidate],
    strategy: &S,
) -> Result<SolveResult, EngineError> {
    let mut engine = CandidateEngine::new(candidates.iter().cloned())?;

    if !engine.contains(&config.secret) {
        return Err(EngineError::CandidateNotFound(config.secret));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = engine.len();

        let guess = engine.suggest_with(strategy)?;
        let worst_case = if candidates_before > 1 {
            engine.score_of(guess.text()).map(|score| score.worst_case)
        } else {
            None
        };

        let feedback = likeness(guess.text(), &config.secret)?;
        engine.remove_passwords(guess.text(), feedback);

        debug!(%guess, feedback, remaining = engine.len(), "attempt scored");

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            likeness: feedback,
            candidates_before,
            candidates_after: engine.len(),
            worst_case,
        });

        if guess.text() == config.secret {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: config.secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret: config.secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{MinimaxStrategy, RandomStrategy};
    use crate::wordlists::DEFAULT_PASSWORDS;
    use crate::wordlists::loader::words_from_slice;

    fn animals() -> Vec<Candidate> {
        words_from_slice(&["bird", "fish", "lion", "seal", "bull"])
    }

    #[test]
    fn solve_word_succeeds() {
        let config = SolveConfig::new("lion".to_string());
        let result = solve_word(config, &animals(), &MinimaxStrategy).unwrap();

        assert!(result.success);
        let words: Vec<&str> = result.guesses.iter().map(|g| g.word.as_str()).collect();
        assert_eq!(words, ["fish", "bird", "lion"]);
        assert_eq!(result.guesses[0].likeness, 1);
        assert_eq!(result.guesses[0].worst_case, Some(2));
        assert_eq!(result.guesses[2].worst_case, None);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let candidates = words_from_slice(DEFAULT_PASSWORDS);
        let config = SolveConfig::new("weaker".to_string());

        let result = solve_word(config, &candidates, &MinimaxStrategy).unwrap();

        assert!(result.success);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses.last().unwrap().word, "weaker");
    }

    #[test]
    fn solve_unknown_secret_returns_error() {
        let config = SolveConfig::new("wolf".to_string());
        let result = solve_word(config, &animals(), &MinimaxStrategy);

        assert!(matches!(result, Err(EngineError::CandidateNotFound(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("bull".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, &animals(), &MinimaxStrategy).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn random_strategy_still_finds_secret() {
        for secret in ["bird", "fish", "lion", "seal", "bull"] {
            let config = SolveConfig::new(secret.to_string());
            let result = solve_word(config, &animals(), &RandomStrategy).unwrap();

            assert!(result.success);
            assert!(result.guesses.len() <= 5);
        }
    }
}

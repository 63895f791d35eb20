//! Benchmark command
//!
//! Plays every candidate (or a random sample) as the secret and collects
//! attempt statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Candidate;
use crate::solver::{EngineError, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub worst_secrets: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the secrets to play: all candidates, or `sample` of them at random
#[must_use]
pub fn select_secrets(candidates: &[Candidate], sample: Option<usize>) -> Vec<Candidate> {
    match sample {
        Some(count) if count < candidates.len() => candidates
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
        _ => candidates.to_vec(),
    }
}

/// Run benchmark on a set of secrets
///
/// # Errors
///
/// Returns an error if the candidates differ in length or a secret is not
/// one of the candidates.
pub fn run_benchmark<S: Strategy>(
    candidates: &[Candidate],
    secrets: &[Candidate],
    strategy: &S,
) -> Result<BenchmarkResult, EngineError> {
    info!(
        candidates = candidates.len(),
        secrets = secrets.len(),
        "benchmark started"
    );

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut per_secret: Vec<(String, usize)> = Vec::with_capacity(secrets.len());

    for secret in secrets {
        pb.set_message(secret.text().to_string());

        let result = solve_word(
            SolveConfig::new(secret.text().to_string()),
            candidates,
            strategy,
        )?;
        let guesses = result.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
        per_secret.push((result.secret, guesses));

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = secrets.len();

    per_secret.sort_by(|a, b| b.1.cmp(&a.1));
    per_secret.truncate(5);

    Ok(BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        worst_secrets: per_secret,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;
    use crate::wordlists::DEFAULT_PASSWORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_all_secrets() {
        let candidates = words_from_slice(DEFAULT_PASSWORDS);
        let result = run_benchmark(&candidates, &candidates, &MinimaxStrategy).unwrap();

        assert_eq!(result.total_words, DEFAULT_PASSWORDS.len());
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= DEFAULT_PASSWORDS.len());
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        assert_eq!(
            result.distribution.values().sum::<usize>(),
            DEFAULT_PASSWORDS.len()
        );
        assert!(result.worst_secrets.len() <= 5);
    }

    #[test]
    fn benchmark_no_secrets() {
        let candidates = words_from_slice(DEFAULT_PASSWORDS);
        let result = run_benchmark(&candidates, &[], &MinimaxStrategy).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn select_secrets_sample() {
        let candidates = words_from_slice(DEFAULT_PASSWORDS);

        assert_eq!(select_secrets(&candidates, None).len(), 11);
        assert_eq!(select_secrets(&candidates, Some(100)).len(), 11);

        let sample = select_secrets(&candidates, Some(3));
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|s| candidates.contains(s)));
    }
}

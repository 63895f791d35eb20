//! Minimax guess ranking
//!
//! Implements worst-case minimization over likeness feedback.

mod calculator;
mod selector;

pub use calculator::{GuessScore, likeness_histogram, score_guess};
pub use selector::{rank_guesses, select_best_guess};

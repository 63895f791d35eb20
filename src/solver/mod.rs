//! Candidate elimination
//!
//! The likeness matrix, guess ranking and the engine that ties them together.

mod engine;
mod matrix;
pub mod minimax;
pub mod strategy;
mod views;

pub use engine::{CandidateEngine, EngineError, Status};
pub use matrix::LikenessMatrix;
pub use minimax::GuessScore;
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
pub use views::{View, list_view, matrix_view};

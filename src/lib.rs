//! Likeness Solver
//!
//! A solver for terminal-hacking password puzzles. Every attempt reports a
//! likeness (how many letters match the password by position); the solver
//! eliminates the candidates that disagree and suggests the attempt whose
//! worst outcome leaves the fewest candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use likeness_solver::core::likeness;
//! use likeness_solver::solver::CandidateEngine;
//!
//! assert_eq!(likeness("bird", "bull").unwrap(), 1);
//!
//! let mut engine = CandidateEngine::new(["bird", "fish", "lion", "seal", "bull"]).unwrap();
//! let guess = engine.suggest().unwrap();
//! assert_eq!(guess.text(), "fish");
//!
//! // The terminal answered "Likeness=1"
//! engine.remove_passwords("fish", 1);
//! assert_eq!(engine.len(), 2);
//! ```

// Core domain types
pub mod core;

// Candidate engine and guess selection
pub mod solver;

// Built-in passwords and loaders
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

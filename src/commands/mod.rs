//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_candidates};
pub use benchmark::{BenchmarkResult, run_benchmark, select_secrets};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_word};

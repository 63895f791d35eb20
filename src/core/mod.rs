//! Core domain types for the likeness puzzle
//!
//! This module contains the fundamental domain types with no solver logic.
//! Everything here is pure and has simple mathematical properties.

mod candidate;
mod likeness;

pub use candidate::Candidate;
pub use likeness::{LikenessError, likeness};

//! Positional likeness between two passwords
//!
//! Likeness is the number of index-aligned characters two equal-length words
//! share. It is the complement of the Hamming distance, and it is the only
//! feedback the puzzle terminal gives after a wrong attempt.

use thiserror::Error;

/// Error returned when two words cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LikenessError {
    /// The words differ in length, or one of them is empty
    #[error("cannot compare words of length {left} and {right}")]
    IncomparableInput { left: usize, right: usize },
}

/// Count the positions where `a` and `b` hold the same character
///
/// Both words must have the same non-zero length (in characters).
///
/// # Errors
/// Returns `LikenessError::IncomparableInput` if the lengths differ or either
/// word is empty.
///
/// # Examples
/// ```
/// use likeness_solver::core::likeness;
///
/// assert_eq!(likeness("bird", "bird").unwrap(), 4);
/// assert_eq!(likeness("bird", "bull").unwrap(), 1);
/// assert!(likeness("bird", "birds").is_err());
/// ```
pub fn likeness(a: &str, b: &str) -> Result<usize, LikenessError> {
    let left = a.chars().count();
    let right = b.chars().count();

    if left == 0 || left != right {
        return Err(LikenessError::IncomparableInput { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x == y).count())
}

//! Likeness matrix
//!
//! Dense, row-major table of pairwise likeness values between the current
//! candidates. The matrix is computed once; eliminations only shrink it.

use crate::core::{Candidate, LikenessError, likeness};

/// Symmetric table of likeness values indexed by candidate position
///
/// `get(i, j)` is the likeness between candidate `i` and candidate `j`, and
/// `get(i, i)` is the candidate length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikenessMatrix {
    size: usize,
    cells: Vec<usize>,
}

impl LikenessMatrix {
    /// Compute the full matrix for a candidate list
    ///
    /// Each unordered pair is compared once and mirrored.
    ///
    /// # Errors
    /// Returns `LikenessError::IncomparableInput` if two candidates differ in
    /// length or a candidate is empty.
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::core::Candidate;
    /// use likeness_solver::solver::LikenessMatrix;
    ///
    /// let candidates: Vec<Candidate> = ["bird", "bull"].into_iter().map(Candidate::from).collect();
    /// let matrix = LikenessMatrix::build(&candidates).unwrap();
    ///
    /// assert_eq!(matrix.get(0, 0), 4);
    /// assert_eq!(matrix.get(0, 1), 1);
    /// assert_eq!(matrix.get(1, 0), 1);
    /// ```
    pub fn build(candidates: &[Candidate]) -> Result<Self, LikenessError> {
        let size = candidates.len();
        let mut cells = vec![0; size * size];

        for (i, a) in candidates.iter().enumerate() {
            for (j, b) in candidates.iter().enumerate().skip(i) {
                let value = likeness(a.text(), b.text())?;
                cells[i * size + j] = value;
                cells[j * size + i] = value;
            }
        }

        Ok(Self { size, cells })
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Likeness between candidates `row` and `col`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(col < self.size, "column {col} out of range");
        self.cells[row * self.size + col]
    }

    /// All likeness values of one candidate, including its own length
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Keep only the rows and columns whose flag is set
    ///
    /// Surviving entries keep their relative order. `keep` must have one flag
    /// per row.
    pub fn retain(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.size, "one flag per row required");

        let kept: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect();

        let mut cells = Vec::with_capacity(kept.len() * kept.len());
        for &row in &kept {
            let values = self.row(row);
            cells.extend(kept.iter().map(|&col| values[col]));
        }

        self.size = kept.len();
        self.cells = cells;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> Vec<Candidate> {
        ["bird", "fish", "lion", "seal", "bull"]
            .into_iter()
            .map(Candidate::from)
            .collect()
    }

    #[test]
    fn build_is_symmetric_with_length_diagonal() {
        let matrix = LikenessMatrix::build(&animals()).unwrap();

        assert_eq!(matrix.len(), 5);
        for i in 0..5 {
            assert_eq!(matrix.get(i, i), 4);
            for j in 0..5 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn build_known_row() {
        let matrix = LikenessMatrix::build(&animals()).unwrap();
        // bird vs bird, fish, lion, seal, bull
        assert_eq!(matrix.row(0), &[4, 1, 1, 0, 1]);
    }

    #[test]
    fn build_empty() {
        let matrix = LikenessMatrix::build(&[]).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }

    #[test]
    fn build_rejects_mixed_lengths() {
        let candidates = vec![Candidate::from("bird"), Candidate::from("birds")];
        assert!(LikenessMatrix::build(&candidates).is_err());
    }

    #[test]
    fn retain_drops_row_and_column() {
        let candidates = animals();
        let mut matrix = LikenessMatrix::build(&candidates).unwrap();

        // Drop "fish"
        matrix.retain(&[true, false, true, true, true]);

        let remaining: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| c.text() != "fish")
            .collect();
        assert_eq!(matrix, LikenessMatrix::build(&remaining).unwrap());
    }

    #[test]
    fn retain_nothing() {
        let mut matrix = LikenessMatrix::build(&animals()).unwrap();
        matrix.retain(&[false; 5]);
        assert!(matrix.is_empty());
        assert!(matrix.row(0).is_empty());
    }
}

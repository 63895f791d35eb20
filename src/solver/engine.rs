//! Candidate engine
//!
//! Owns the remaining candidates and their likeness matrix, suggests the next
//! attempt and applies the terminal's feedback.

use super::LikenessMatrix;
use super::minimax::{GuessScore, rank_guesses, score_guess, select_best_guess};
use super::strategy::{MinimaxStrategy, Strategy};
use super::views::{View, list_view, matrix_view};
use crate::core::{Candidate, LikenessError};
use crate::wordlists::DEFAULT_PASSWORDS;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the engine and its drivers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Two candidates could not be compared (mixed lengths or empty word)
    #[error(transparent)]
    IncomparableInput(#[from] LikenessError),
    /// A suggestion was requested but every candidate has been eliminated
    #[error("there are no passwords")]
    NoCandidates,
    /// The named word is not among the remaining candidates
    #[error("'{0}' is not a remaining password")]
    CandidateNotFound(String),
}

/// Where the search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// More than one candidate may still be the secret
    #[default]
    Searching,
    /// Exactly one candidate was left; it is the answer
    Solved,
    /// Every candidate was eliminated, so the feedback was inconsistent
    Exhausted,
}

/// Minimax solver state for one round of the puzzle
///
/// All candidates must share one length; the loaders in
/// [`crate::wordlists::loader`] enforce this before construction and the
/// engine only re-checks it while building the matrix.
#[derive(Debug, Clone)]
pub struct CandidateEngine {
    candidates: Vec<Candidate>,
    matrix: LikenessMatrix,
    status: Status,
    answer: Option<Candidate>,
}

impl CandidateEngine {
    /// Create an engine over the given candidates, in order
    ///
    /// # Errors
    /// Returns `EngineError::IncomparableInput` if the candidates differ in
    /// length or one of them is empty.
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::solver::CandidateEngine;
    ///
    /// let engine = CandidateEngine::new(["bird", "fish", "lion"]).unwrap();
    /// assert_eq!(engine.len(), 3);
    ///
    /// assert!(CandidateEngine::new(["bird", "horse"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Candidate>,
    {
        let candidates: Vec<Candidate> = words.into_iter().map(Into::into).collect();
        let matrix = LikenessMatrix::build(&candidates)?;

        debug!(candidates = candidates.len(), "likeness matrix built");

        Ok(Self {
            candidates,
            matrix,
            status: Status::Searching,
            answer: None,
        })
    }

    /// Remaining candidates in their original order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Likeness values of the remaining candidates
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> &LikenessMatrix {
        &self.matrix
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Shared candidate length, if any candidate remains
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.candidates.first().map(Candidate::len)
    }

    /// Position of `word` among the remaining candidates
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.candidates.iter().position(|c| c == word)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// True once a single candidate has been identified
    ///
    /// Stays true for the rest of the engine's life.
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }

    /// True if feedback eliminated every candidate before one was identified
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.status == Status::Exhausted
    }

    /// The identified password, once solved
    #[must_use]
    pub const fn answer(&self) -> Option<&Candidate> {
        self.answer.as_ref()
    }

    /// Suggest the next password to try using minimax
    ///
    /// With one candidate left it is the answer and the engine becomes solved.
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidates` if no candidate remains.
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::solver::CandidateEngine;
    ///
    /// let mut engine = CandidateEngine::new(["lion"]).unwrap();
    /// assert_eq!(engine.suggest().unwrap().text(), "lion");
    /// assert!(engine.is_solved());
    /// ```
    pub fn suggest(&mut self) -> Result<Candidate, EngineError> {
        self.suggest_with(&MinimaxStrategy)
    }

    /// Suggest the next password using the given strategy
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidates` if no candidate remains.
    pub fn suggest_with<S: Strategy>(&mut self, strategy: &S) -> Result<Candidate, EngineError> {
        match self.candidates.len() {
            0 => {
                self.refresh_status();
                Err(EngineError::NoCandidates)
            }
            1 => {
                self.refresh_status();
                Ok(self.candidates[0].clone())
            }
            _ => {
                let index = strategy
                    .select_guess(&self.matrix)
                    .ok_or(EngineError::NoCandidates)?;
                let guess = self.candidates[index].clone();
                debug!(%guess, remaining = self.candidates.len(), "suggested password");
                Ok(guess)
            }
        }
    }

    /// Minimax score of the current suggestion, if two or more candidates remain
    #[must_use]
    pub fn best_score(&self) -> Option<GuessScore> {
        if self.candidates.len() < 2 {
            return None;
        }
        select_best_guess(&self.matrix)
    }

    /// Every remaining candidate scored, best guess first
    #[must_use]
    pub fn rank(&self) -> Vec<GuessScore> {
        rank_guesses(&self.matrix)
    }

    /// Score an arbitrary remaining candidate as the next guess
    #[must_use]
    pub fn score_of(&self, word: &str) -> Option<GuessScore> {
        self.position(word)
            .map(|index| score_guess(&self.matrix, index))
    }

    /// Remove a password known to be wrong, without any likeness feedback
    ///
    /// Returns `false` if the password is not a remaining candidate.
    pub fn remove_dud(&mut self, word: &str) -> bool {
        let Some(index) = self.position(word) else {
            debug!(word, "dud not among candidates");
            return false;
        };

        let keep: Vec<bool> = (0..self.candidates.len()).map(|i| i != index).collect();
        self.retain(&keep);

        debug!(word, remaining = self.candidates.len(), "dud removed");
        true
    }

    /// Apply the likeness the terminal reported for an attempted password
    ///
    /// Keeps only the candidates whose likeness to `guessed` equals
    /// `likeness`; the guess itself goes too unless `likeness` is the full
    /// length. Returns the number of candidates removed, or `None` if
    /// `guessed` is not a remaining candidate (nothing changes).
    ///
    /// # Examples
    /// ```
    /// use likeness_solver::solver::CandidateEngine;
    ///
    /// let mut engine = CandidateEngine::new(["bird", "fish", "lion", "seal", "bull"]).unwrap();
    /// assert_eq!(engine.remove_passwords("bird", 1), Some(2));
    ///
    /// let left: Vec<&str> = engine.candidates().iter().map(|c| c.text()).collect();
    /// assert_eq!(left, ["fish", "lion", "bull"]);
    /// ```
    pub fn remove_passwords(&mut self, guessed: &str, likeness: usize) -> Option<usize> {
        let Some(index) = self.position(guessed) else {
            debug!(guessed, "attempted password not among candidates");
            return None;
        };

        let keep: Vec<bool> = self
            .matrix
            .row(index)
            .iter()
            .map(|&value| value == likeness)
            .collect();
        let removed = keep.iter().filter(|&&flag| !flag).count();
        self.retain(&keep);

        debug!(
            guessed,
            likeness,
            removed,
            remaining = self.candidates.len(),
            "feedback applied"
        );
        Some(removed)
    }

    /// Render the remaining candidates in the requested view
    #[must_use]
    pub fn render(&self, view: View) -> String {
        match view {
            View::List => self.render_list(),
            View::Matrix => self.render_matrix(),
        }
    }

    /// One candidate per line
    #[must_use]
    pub fn render_list(&self) -> String {
        list_view(&self.candidates)
    }

    /// Candidates with their pairwise likeness values
    #[must_use]
    pub fn render_matrix(&self) -> String {
        matrix_view(&self.candidates, &self.matrix)
    }

    /// Drop candidates and their matrix rows/columns in one step
    fn retain(&mut self, keep: &[bool]) {
        self.matrix.retain(keep);

        let mut flags = keep.iter().copied();
        self.candidates.retain(|_| flags.next().unwrap_or(false));

        debug_assert_eq!(self.matrix.len(), self.candidates.len());
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        if self.status != Status::Searching {
            return;
        }

        match self.candidates.as_slice() {
            [] => self.status = Status::Exhausted,
            [answer] => {
                self.status = Status::Solved;
                self.answer = Some(answer.clone());
                debug!(%answer, "password identified");
            }
            _ => {}
        }
    }
}

impl Default for CandidateEngine {
    /// Engine over the built-in demonstration list
    ///
    /// # Panics
    /// Will not panic - the built-in words all have six letters.
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORDS.iter().copied()).expect("built-in passwords share one length")
    }
}

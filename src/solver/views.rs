//! Text views of the remaining candidates
//!
//! Both views are rebuilt on demand from the current candidate list; nothing
//! is cached.

use super::LikenessMatrix;
use crate::core::Candidate;
use std::fmt::Write;

const HEADER: &str = "Remaining Passwords";
const EMPTY: &str = "There are no passwords to display";

/// Which view a driver prints between turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// One candidate per line
    #[default]
    List,
    /// Candidates with the upper triangle of their likeness values
    Matrix,
}

/// Render the candidates one per line between dash rules
///
/// # Examples
/// ```
/// use likeness_solver::core::Candidate;
/// use likeness_solver::solver::list_view;
///
/// let candidates = vec![Candidate::from("bird"), Candidate::from("fish")];
/// assert_eq!(
///     list_view(&candidates),
///     "Remaining Passwords\n----\nbird\nfish\n----\n"
/// );
/// ```
#[must_use]
pub fn list_view(candidates: &[Candidate]) -> String {
    let Some(first) = candidates.first() else {
        return EMPTY.to_string();
    };

    let rule = "-".repeat(first.len());
    let mut output = format!("{HEADER}\n{rule}\n");
    for candidate in candidates {
        output.push_str(candidate.text());
        output.push('\n');
    }
    output.push_str(&rule);
    output.push('\n');
    output
}

/// Render the candidates as a staircase of likeness values
///
/// Row `i` starts under column `i` with the candidate itself and lists its
/// likeness to every later candidate, centred under that candidate's header.
/// The lower triangle and the diagonal are left out.
#[must_use]
pub fn matrix_view(candidates: &[Candidate], matrix: &LikenessMatrix) -> String {
    let Some(first) = candidates.first() else {
        return EMPTY.to_string();
    };

    let cell = first.len() + 1;
    let count = candidates.len();
    let mut output = String::new();

    let _ = writeln!(output, "{HEADER}");
    let _ = writeln!(output, "{}", "-".repeat(count * cell));
    let header: String = candidates
        .iter()
        .map(|c| format!("{:<cell$}", c.text()))
        .collect();
    let _ = writeln!(output, "{}", header.trim_end());
    let _ = writeln!(output, "{}", "-".repeat(count * cell));

    for (i, candidate) in candidates.iter().enumerate() {
        let indent = " ".repeat(i * cell);

        let mut row = format!("{indent}{:<cell$}", candidate.text());
        for j in (i + 1)..count {
            let _ = write!(row, "{:^cell$}", matrix.get(i, j));
        }
        let _ = writeln!(output, "{}", row.trim_end());
        let _ = writeln!(output, "{indent}{}", "-".repeat((count - i) * cell));
    }

    output
}

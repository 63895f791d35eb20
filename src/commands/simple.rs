//! Simple interactive CLI mode
//!
//! Line-based driver: read the terminal's passwords, then suggest attempts and
//! apply the likeness the player reports, round after round.

use crate::core::Candidate;
use crate::solver::{CandidateEngine, EngineError, View};
use crate::wordlists::loader::{CandidateCollector, LoadError};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Found,
    Quit,
    NoCandidates,
    EndOfInput,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// If `initial` is given it is used for the first round instead of asking the
/// player to type the passwords.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(view: View, initial: Option<Vec<Candidate>>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple_with(&mut input, &mut output, view, initial)
}

/// Run the simple mode over any input and output
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    view: View,
    initial: Option<Vec<Candidate>>,
) -> Result<()> {
    let mut initial = initial;

    loop {
        let candidates = match initial.take() {
            Some(candidates) => candidates,
            None => read_passwords(input, output)?,
        };

        info!(candidates = candidates.len(), "round started");
        let mut engine = CandidateEngine::new(candidates)?;

        let end = play_round(&mut engine, input, output, view)?;
        info!(?end, "round finished");
        if end == RoundEnd::EndOfInput {
            return Ok(());
        }

        write!(output, "Enter new set of passwords (yes/no): ")?;
        output.flush()?;
        match read_line(input)? {
            Some(answer) if !answer.eq_ignore_ascii_case("no") => writeln!(output)?,
            _ => return Ok(()),
        }
    }
}

/// Read passwords until `0` or end of input, re-prompting on length mismatches
fn read_passwords<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<Candidate>> {
    writeln!(
        output,
        "Enter passwords separated by a return keystroke, enter 0 when finished."
    )?;

    let mut collector = CandidateCollector::new();
    while let Some(entry) = read_line(input)? {
        if entry == "0" {
            break;
        }
        match collector.push(&entry) {
            Ok(_) => {}
            Err(LoadError::LengthMismatch { .. }) => {
                writeln!(output, "Length does not match other passwords. Try again.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(collector.finish())
}

fn play_round<R: BufRead, W: Write>(
    engine: &mut CandidateEngine,
    input: &mut R,
    output: &mut W,
    view: View,
) -> Result<RoundEnd> {
    loop {
        if let Some(answer) = engine.answer() {
            writeln!(output, "\nThe password is: {answer}")?;
            return Ok(RoundEnd::Found);
        }

        writeln!(output, "\n{}", engine.render(view))?;

        let suggestion = match engine.suggest() {
            Ok(suggestion) => suggestion,
            Err(EngineError::NoCandidates) => {
                writeln!(output, "There are no passwords")?;
                return Ok(RoundEnd::NoCandidates);
            }
            Err(e) => return Err(e.into()),
        };
        if engine.is_solved() {
            continue;
        }

        writeln!(output, "Suggested Password: {suggestion}")?;
        writeln!(output, "Enter 0 to quit program.")?;
        write!(output, "Enter password attempted or 'remove dud': ")?;
        output.flush()?;

        let Some(entry) = read_line(input)? else {
            return Ok(RoundEnd::EndOfInput);
        };

        match entry.as_str() {
            "0" => return Ok(RoundEnd::Quit),
            "remove dud" => {
                write!(output, "Enter the dud password to remove: ")?;
                output.flush()?;
                let Some(dud) = read_line(input)? else {
                    return Ok(RoundEnd::EndOfInput);
                };
                if dud == "0" {
                    return Ok(RoundEnd::Quit);
                }
                if !engine.remove_dud(&dud) {
                    writeln!(output, "'{dud}' is not a remaining password.")?;
                }
            }
            attempted => {
                write!(output, "Enter likeness: ")?;
                output.flush()?;
                let Some(likeness) = read_likeness(input)? else {
                    return Ok(RoundEnd::EndOfInput);
                };

                if engine.remove_passwords(attempted, likeness).is_none() {
                    writeln!(output, "'{attempted}' is not a remaining password.")?;
                }
                if likeness == attempted.chars().count() {
                    writeln!(output, "\nThe password is: {attempted}")?;
                    return Ok(RoundEnd::Found);
                }
            }
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Skip tokens until one parses as a likeness value
fn read_likeness<R: BufRead>(input: &mut R) -> io::Result<Option<usize>> {
    while let Some(line) = read_line(input)? {
        if let Some(value) = line
            .split_whitespace()
            .find_map(|token| token.parse::<usize>().ok())
        {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

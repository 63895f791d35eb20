//! TUI application state and logic

use crate::core::Candidate;
use crate::solver::{CandidateEngine, EngineError, GuessScore, Status, View};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// State snapshot for undo functionality
#[derive(Clone)]
pub struct StateSnapshot {
    pub engine: CandidateEngine,
    pub history_len: usize,
}

/// Application state
pub struct App {
    pub initial: Vec<Candidate>,
    pub engine: CandidateEngine,
    pub view: View,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
    pub undo_stack: Vec<StateSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the likeness reported for the current guess
    Likeness,
    /// Typing a different password that was attempted
    ManualWord,
    /// Typing a password to discard
    Dud,
    /// Round finished (found or out of candidates)
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    /// `None` for a discarded dud
    pub likeness: Option<usize>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: String,
    pub score: Option<GuessScore>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    pub found: usize,
    pub attempts: usize,
}

impl App {
    /// Create the application for a candidate list
    ///
    /// # Errors
    /// Returns an error if the candidates differ in length.
    pub fn new(candidates: Vec<Candidate>, view: View) -> Result<Self, EngineError> {
        let engine = CandidateEngine::new(candidates.iter().cloned())?;

        Ok(Self {
            initial: candidates,
            engine,
            view,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest the password that splits the rest best."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Try it, then type the likeness the terminal reports.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Likeness,
            manual_word: String::new(),
            undo_stack: Vec::new(),
        })
    }

    pub fn compute_suggestion(&mut self) {
        match self.engine.suggest() {
            Ok(guess) => {
                self.current_guess = Some(GuessInfo {
                    score: self.engine.score_of(guess.text()).filter(|_| self.engine.len() > 1),
                    word: guess.text().to_string(),
                });
            }
            Err(_) => {
                self.current_guess = None;
            }
        }
        self.check_round_over();
    }

    fn check_round_over(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }

        match self.engine.status() {
            Status::Solved => {
                let answer = self
                    .engine
                    .answer()
                    .map(|a| a.text().to_uppercase())
                    .unwrap_or_default();
                self.stats.rounds += 1;
                self.stats.found += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("🔓 The password is {answer}"), MessageStyle::Success);
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            Status::Exhausted => {
                self.stats.rounds += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    "No passwords remain - a likeness may be wrong. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Status::Searching => {}
        }
    }

    fn snapshot(&mut self) {
        self.undo_stack.push(StateSnapshot {
            engine: self.engine.clone(),
            history_len: self.history.len(),
        });
    }

    /// Apply the likeness typed for the current guess
    pub fn handle_likeness(&mut self, input: &str) {
        let Ok(likeness) = input.trim().parse::<usize>() else {
            self.add_message("Likeness must be a number!", MessageStyle::Error);
            return;
        };
        let Some(guess) = self.current_guess.as_ref().map(|g| g.word.clone()) else {
            return;
        };

        if let Some(length) = self.engine.word_length()
            && likeness > length
        {
            self.add_message(
                &format!("Likeness can be at most {length}!"),
                MessageStyle::Error,
            );
            return;
        }

        self.snapshot();
        let candidates_before = self.engine.len();
        self.engine.remove_passwords(&guess, likeness);
        let candidates_after = self.engine.len();
        self.stats.attempts += 1;

        debug!(%guess, likeness, candidates_after, "likeness entered");

        self.history.push(HistoryEntry {
            guess,
            likeness: Some(likeness),
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if candidates_after > 1 {
            self.add_message(
                &format!("{candidates_after} passwords remaining"),
                MessageStyle::Info,
            );
        }
        self.compute_suggestion();
    }

    /// Discard a password typed in dud mode
    pub fn remove_dud(&mut self) {
        let word = self.manual_word.trim().to_string();
        let candidates_before = self.engine.len();
        let snapshot = self.engine.clone();

        if self.engine.remove_dud(&word) {
            self.undo_stack.push(StateSnapshot {
                engine: snapshot,
                history_len: self.history.len(),
            });
            self.history.push(HistoryEntry {
                guess: word.clone(),
                likeness: None,
                candidates_before,
                candidates_after: self.engine.len(),
            });
            self.add_message(
                &format!("Removed dud {}", word.to_uppercase()),
                MessageStyle::Info,
            );
            self.input_mode = InputMode::Likeness;
            self.manual_word.clear();
            self.compute_suggestion();
        } else {
            self.add_message(
                &format!("'{}' is not a remaining password!", word.to_uppercase()),
                MessageStyle::Error,
            );
        }
    }

    /// Make a different remaining password the current guess
    pub fn use_manual_word(&mut self) {
        let word = self.manual_word.trim().to_string();

        let Some(score) = self.engine.score_of(&word) else {
            self.add_message(
                &format!("'{}' is not a remaining password!", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        };

        let suggested = self.current_guess.as_ref().and_then(|g| g.score);
        if let Some(suggested) = suggested
            && score.worst_case > suggested.worst_case
        {
            let note = format!(
                "Note: suggestion leaves at most {} ({} fewer)",
                suggested.worst_case,
                score.worst_case - suggested.worst_case
            );
            self.add_message(&note, MessageStyle::Info);
        }

        self.add_message(
            &format!(
                "Using: {} (worst case {} passwords)",
                word.to_uppercase(),
                score.worst_case
            ),
            MessageStyle::Success,
        );
        self.current_guess = Some(GuessInfo {
            word,
            score: Some(score),
        });
        self.input_mode = InputMode::Likeness;
        self.manual_word.clear();
    }

    pub fn new_round(&mut self) {
        match CandidateEngine::new(self.initial.iter().cloned()) {
            Ok(engine) => self.engine = engine,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.history.clear();
        self.undo_stack.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Likeness;
        self.add_message("New round started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.engine = snapshot.engine;
            self.history.truncate(snapshot.history_len);
            if self.input_mode == InputMode::RoundOver {
                self.input_mode = InputMode::Likeness;
                self.stats.rounds = self.stats.rounds.saturating_sub(1);
            }
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::List => View::Matrix,
            View::Matrix => View::List,
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.engine.len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_round(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Char('m') => app.toggle_view(),
                    _ => {}
                },
                InputMode::Likeness => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_round(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Char('m') => app.toggle_view(),
                    KeyCode::Char('d') => {
                        app.input_mode = InputMode::Dud;
                        app.add_message("Enter the dud password to remove", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::ManualWord;
                        app.add_message("Enter the password you tried", MessageStyle::Info);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_likeness(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord | InputMode::Dud => match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        app.input_mode = InputMode::Likeness;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) if !c.is_control() => app.manual_word.push(c),
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => {
                        if app.input_mode == InputMode::Dud {
                            app.remove_dud();
                        } else {
                            app.use_manual_word();
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn animal_app() -> App {
        let mut app = App::new(
            words_from_slice(&["bird", "fish", "lion", "seal", "bull"]),
            View::List,
        )
        .unwrap();
        app.compute_suggestion();
        app
    }

    #[test]
    fn initial_suggestion() {
        let app = animal_app();
        let guess = app.current_guess.as_ref().unwrap();

        assert_eq!(guess.word, "fish");
        assert_eq!(guess.score.map(|s| s.worst_case), Some(2));
        assert_eq!(app.input_mode, InputMode::Likeness);
    }

    #[test]
    fn likeness_narrows_and_finds() {
        let mut app = animal_app();

        app.handle_likeness("1");
        assert_eq!(app.get_candidates_count(), 2);
        assert_eq!(app.current_guess.as_ref().unwrap().word, "bird");

        app.handle_likeness("1");
        assert_eq!(app.get_candidates_count(), 1);
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.found, 1);
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn invalid_likeness_is_rejected() {
        let mut app = animal_app();

        app.handle_likeness("x");
        app.handle_likeness("9");

        assert_eq!(app.get_candidates_count(), 5);
        assert!(app.history.is_empty());
    }

    #[test]
    fn undo_restores_engine() {
        let mut app = animal_app();

        app.handle_likeness("3");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.get_candidates_count(), 0);

        app.undo_last();
        assert_eq!(app.get_candidates_count(), 5);
        assert_eq!(app.input_mode, InputMode::Likeness);
        assert!(app.history.is_empty());
    }

    #[test]
    fn dud_and_manual_word() {
        let mut app = animal_app();

        app.input_mode = InputMode::Dud;
        app.manual_word = "seal".to_string();
        app.remove_dud();
        assert_eq!(app.get_candidates_count(), 4);
        assert_eq!(app.input_mode, InputMode::Likeness);

        app.input_mode = InputMode::ManualWord;
        app.manual_word = "bull".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word, "bull");

        app.manual_word = "wolf".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word, "bull");
    }

    #[test]
    fn new_round_restores_initial_list() {
        let mut app = animal_app();
        app.handle_likeness("1");
        app.toggle_view();

        app.new_round();

        assert_eq!(app.get_candidates_count(), 5);
        assert!(app.history.is_empty());
        assert_eq!(app.view, View::Matrix);
    }
}

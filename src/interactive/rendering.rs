//! TUI rendering with ratatui
//!
//! Panels for the suggestion, the remaining passwords and the round history.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::worst_case_bar;
use crate::solver::View;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 LIKENESS SOLVER - Terminal Hacking")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Current guess info
            Constraint::Min(6),         // Candidates
            Constraint::Percentage(25), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let mut content = vec![Line::from(vec![
        Span::raw("Suggested: "),
        Span::styled(
            guess.word.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(score) = guess.score {
        let others = app.get_candidates_count().saturating_sub(1);
        content.push(Line::from(format!(
            "Worst:     [{}] {} of {} others remain",
            worst_case_bar(score.worst_case, others, 18),
            score.worst_case,
            others
        )));
        content.push(Line::from(format!(
            "Expected:  {:.2} passwords remain",
            score.expected_remaining
        )));
        content.push(Line::from(format!(
            "Spread:    {} distinct likeness values",
            score.diversity
        )));
    } else {
        content.push(Line::from("Only one password left - this is it."));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.view {
        View::List => " Passwords (m: matrix) ",
        View::Matrix => " Likeness Matrix (m: list) ",
    };

    let text = app.engine.render(app.view);
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let feedback = entry
                .likeness
                .map_or_else(|| "dud".to_string(), |l| format!("likeness {l}"));
            let content = format!(
                "{}: {} {} {} → {}",
                app.history.len() - i,
                entry.guess.to_uppercase(),
                feedback,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.initial.len();
    let remaining = app.get_candidates_count();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = if total == 0 {
        0
    } else {
        (eliminated * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(progress_pct)
        .label(format!("{eliminated}/{total} | {remaining} remain"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | n: new round  u: undo  q: quit ",
            "",
            Color::Green,
        ),
        InputMode::Likeness => (
            " Enter Likeness | TAB: other word  d: dud ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Password Attempted | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
        InputMode::Dud => (
            " Enter Dud Password to Remove | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Likeness => "Mode: Likeness",
        InputMode::ManualWord => "Mode: Manual",
        InputMode::Dud => "Mode: Dud",
        InputMode::RoundOver => "Mode: Done",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Found: {} | Tries: {}",
        app.stats.rounds, app.stats.found, app.stats.attempts
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Passwords: {}", app.get_candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("q: Quit | u: Undo | n: New | m: View")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

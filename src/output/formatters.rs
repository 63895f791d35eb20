//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the list a worst case would keep
///
/// A short bar is a good guess.
#[must_use]
pub fn worst_case_bar(worst_case: usize, total: usize, width: usize) -> String {
    create_progress_bar(worst_case as f64, total as f64, width)
}

/// Pluralize "guess" for a count
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn worst_case_bar_scales_to_list() {
        assert_eq!(worst_case_bar(2, 4, 8), "████░░░░");
    }

    #[test]
    fn guesses_word_plural() {
        assert_eq!(guesses_word(1), "guess");
        assert_eq!(guesses_word(3), "guesses");
    }
}

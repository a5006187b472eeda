//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Color name painted in its own color
#[must_use]
pub fn color_label(color: Color) -> ColoredString {
    let name = color.name();
    match color {
        Color::Red => name.bright_red(),
        Color::Blue => name.bright_blue(),
        Color::Green => name.bright_green(),
        Color::Yellow => name.bright_yellow(),
        Color::Purple => name.purple(),
        Color::Orange => name.truecolor(255, 146, 43),
    }
}

/// A code as space-separated colored names
#[must_use]
pub fn code_label(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| color_label(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as a row of `code_length` pegs: ● black, ○ white, · empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let empty = code_length.saturating_sub(feedback.total());
    format!(
        "{}{}{}",
        "●".repeat(feedback.black),
        "○".repeat(feedback.white),
        "·".repeat(empty)
    )
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_fill_row() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
        assert_eq!(feedback_pegs(Feedback::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn code_label_keeps_order() {
        colored::control::set_override(false);
        let code: Code = "rbgy".parse().unwrap();
        assert_eq!(code_label(&code), "red blue green yellow");
    }

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
}

//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Rules};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as key pegs: ● exact, ○ color-only, · empty
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, Rules};
/// use mastermind_solver::output::formatters::feedback_to_pegs;
///
/// assert_eq!(feedback_to_pegs(Feedback::new(2, 1), Rules::CLASSIC), "●●○·");
/// ```
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, rules: Rules) -> String {
    let exact = usize::from(feedback.exact());
    let color_only = usize::from(feedback.color_only());
    let empty = usize::from(rules.length()).saturating_sub(exact + color_only);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(color_only), "·".repeat(empty))
}

/// Color one peg digit so codes are easy to scan
fn color_peg(peg: u8) -> ColoredString {
    let digit = peg.to_string();
    match peg {
        1 => digit.red(),
        2 => digit.green(),
        3 => digit.yellow(),
        4 => digit.blue(),
        5 => digit.magenta(),
        6 => digit.cyan(),
        7 => digit.bright_red(),
        8 => digit.bright_green(),
        _ => digit.bright_yellow(),
    }
}

/// Format a code with one color per peg
#[must_use]
pub fn colored_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&peg| color_peg(peg).bold().to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long batch runs, hidden when `visible` is false
#[must_use]
pub fn batch_progress(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

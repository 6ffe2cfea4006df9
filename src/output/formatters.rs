//! Formatting utilities for terminal output

use crate::core::{BoardSnapshot, GRID_SIZE};
use std::time::Duration;

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

/// Group the digits of a decimal integer string in threes, e.g. `15511210043330985984000000`
/// becomes `15,511,210,043,330,985,984,000,000`
#[must_use]
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Human readable duration: `850ms`, `12.40s`, `3m 05s`, `2h 07m`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Render a board as indented rows of spaced letters
#[must_use]
pub fn board_lines(board: &BoardSnapshot, indent: usize) -> Vec<String> {
    (0..GRID_SIZE)
        .map(|row| {
            let cells: Vec<String> = (0..GRID_SIZE)
                .map(|col| {
                    board.get(row, col).map_or_else(
                        || ".".to_string(),
                        |l| l.to_char().to_ascii_uppercase().to_string(),
                    )
                })
                .collect();
            format!("{}{}", " ".repeat(indent), cells.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameBoard, Letter};

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn digits_grouped_in_threes() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1234567"), "1,234,567");
        assert_eq!(
            group_digits("15511210043330985984000000"),
            "15,511,210,043,330,985,984,000,000"
        );
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(12_400)), "12.40s");
        assert_eq!(format_duration(Duration::from_secs(185)), "3m 05s");
        assert_eq!(format_duration(Duration::from_secs(7620)), "2h 07m");
    }

    #[test]
    fn board_rendering() {
        let mut board = GameBoard::new(1);
        board.set(0, 0, Letter::from_byte(b'q'));
        let lines = board_lines(&board.snapshot(), 2);

        assert_eq!(lines.len(), GRID_SIZE);
        assert_eq!(lines[0], "  Q . . . .");
        assert_eq!(lines[4], "  . . . . .");
    }
}

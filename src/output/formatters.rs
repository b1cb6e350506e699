//! Formatting utilities for terminal output

use crate::core::{Letter, Puzzle};
use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many puzzle letters a chain covers
#[must_use]
pub fn coverage_bar(covered: u32, needed: u32, width: usize) -> String {
    create_progress_bar(f64::from(covered), f64::from(needed), width)
}

/// Letters as a compact string, e.g. `CFIL`
#[must_use]
pub fn letters_to_string(letters: &[Letter]) -> String {
    letters.iter().copied().map(Letter::as_char).collect()
}

/// Draw the puzzle as a box, one side per row
#[must_use]
pub fn puzzle_sides(puzzle: &Puzzle) -> Vec<String> {
    puzzle
        .sides()
        .iter()
        .enumerate()
        .map(|(i, side)| {
            let letters: Vec<String> = side.iter().map(ToString::to_string).collect();
            format!("side {}: {}", i + 1, letters.join(" "))
        })
        .collect()
}

/// Human readable duration with a unit suited to its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else if secs >= 0.001 {
        format!("{:.1}ms", secs * 1_000.0)
    } else {
        format!("{}µs", duration.as_micros())
    }
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
    fn coverage_bar_counts_letters() {
        assert_eq!(coverage_bar(6, 12, 4), "██░░");
        assert_eq!(coverage_bar(12, 12, 4), "████");
    }

    #[test]
    fn letters_join() {
        let letters: Vec<Letter> = "CFIL".chars().filter_map(Letter::from_char).collect();
        assert_eq!(letters_to_string(&letters), "CFIL");
        assert_eq!(letters_to_string(&[]), "");
    }

    #[test]
    fn sides_are_listed_in_order() {
        let puzzle: Puzzle = "ABC DEF".parse().unwrap();
        assert_eq!(puzzle_sides(&puzzle), vec!["side 1: A B C", "side 2: D E F"]);
    }

    #[test]
    fn durations_pick_units() {
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.50s");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.5ms");
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
    }
}

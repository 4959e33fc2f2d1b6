//! Formatting utilities for terminal output

use crate::core::{Code, Color, Score};
use colored::{ColoredString, Colorize};

/// Render one peg as a colored disc
#[must_use]
pub fn color_peg(color: Color) -> ColoredString {
    let (r, g, b) = match color {
        Color::Beige => (225, 198, 153),
        Color::Darkblue => (30, 60, 160),
        Color::Green => (40, 170, 60),
        Color::Orange => (245, 140, 30),
        Color::Red => (220, 40, 40),
        Color::Black => (90, 90, 90),
        Color::Violet => (150, 70, 200),
        Color::White => (240, 240, 240),
    };
    "●".truecolor(r, g, b)
}

/// Render a code as colored pegs followed by its letters
#[must_use]
pub fn code_to_pegs(code: Code) -> String {
    let pegs: String = code
        .colors()
        .iter()
        .map(|&c| format!("{} ", color_peg(c)))
        .collect();
    format!("{pegs} {code}")
}

/// Plain pin string: `R` per red, `W` per white, `-` for the rest
#[must_use]
pub fn score_to_pins(score: Score) -> String {
    let red = usize::from(score.red).min(5);
    let white = usize::from(score.white).min(5 - red);
    format!("{}{}{}", "R".repeat(red), "W".repeat(white), "-".repeat(5 - red - white))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_no_match() {
        assert_eq!(score_to_pins(Score::new(0, 0)), "-----");
    }

    #[test]
    fn pins_perfect() {
        assert_eq!(score_to_pins(Score::PERFECT), "RRRRR");
    }

    #[test]
    fn pins_mixed() {
        assert_eq!(score_to_pins(Score::new(1, 4)), "RWWWW");
        assert_eq!(score_to_pins(Score::new(2, 1)), "RRW--");
    }

    #[test]
    fn pins_clamp_out_of_range_fields() {
        // A response byte can carry up to 7 in each field
        assert_eq!(score_to_pins(Score::new(7, 7)), "RRRRR");
    }

    #[test]
    fn pegs_end_with_letters() {
        colored::control::set_override(false);
        let code: Code = "bdgor".parse().unwrap();
        assert_eq!(code_to_pegs(code), "● ● ● ● ●  bdgor");
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
}

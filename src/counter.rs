//! Count-up animation for the stat numbers.

use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// Target value and preserved suffix parsed from a stat's text. Text with no
/// digits counts up to zero.
pub fn parse_stat(text: &str) -> (u64, String) {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let target = digits.parse::<u64>().unwrap_or(0);

    let mut suffix = String::new();
    if text.contains('+') {
        suffix.push('+');
    }
    if text.contains('%') {
        suffix.push('%');
    }
    (target, suffix)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, suffix: impl Into<String>, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        Self {
            target,
            suffix: suffix.into(),
            current: 0.0,
            increment: target as f64 / frames,
            finished: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let (target, suffix) = parse_stat(text);
        Self::new(target, suffix, COUNTER_DURATION_MS, COUNTER_FRAME_MS)
    }

    /// Advances one frame and returns the text to display.
    pub fn tick(&mut self) -> String {
        if self.finished {
            return self.final_text();
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            self.final_text()
        } else {
            format!("{}{}", self.current.floor() as u64, self.suffix)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_are_kept() {
        assert_eq!(parse_stat("500+"), (500, "+".to_string()));
        assert_eq!(parse_stat("98%"), (98, "%".to_string()));
        assert_eq!(parse_stat("1,200+"), (1200, "+".to_string()));
        assert_eq!(parse_stat("25"), (25, String::new()));
    }

    #[test]
    fn non_numeric_text_counts_to_zero() {
        assert_eq!(parse_stat("N/A").0, 0);
        let mut anim = CounterAnimation::from_text("lots+");
        assert_eq!(anim.tick(), "0+");
        assert!(anim.is_finished());
    }

    #[test]
    fn runs_for_duration_over_frame_count() {
        let mut anim = CounterAnimation::new(250, "+", 2000, 16);
        let mut frames = 0;
        let mut last = String::new();
        while !anim.is_finished() {
            last = anim.tick();
            frames += 1;
            assert!(frames <= 200, "animation never finished");
        }
        assert_eq!(last, "250+");
        assert!((124..=126).contains(&frames));
    }

    #[test]
    fn intermediate_frames_are_floored_and_monotonic() {
        let mut anim = CounterAnimation::new(10, "%", 2000, 16);
        let mut previous = 0;
        while !anim.is_finished() {
            let text = anim.tick();
            let value: u64 = text.trim_end_matches('%').parse().unwrap();
            assert!(value >= previous);
            assert!(value <= 10);
            previous = value;
        }
        assert_eq!(anim.tick(), "10%");
    }
}

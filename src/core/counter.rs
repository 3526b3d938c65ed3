use super::constants::{COUNTER_DURATION_MS, COUNTER_STEPS};

/// Leading integer of `text`, following `parseInt(text, 10)`: leading
/// whitespace and one sign are accepted, parsing stops at the first
/// non-digit. `None` when no digit is found. Values beyond `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest, |(i, _)| &rest[..i]);
    if digits.is_empty() {
        return None;
    }
    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Fixed-step count-up from zero to `target`, one text per tick.
///
/// Yields `floor(current) + suffix` for intermediate ticks and exactly
/// `target + suffix` on the last one, then ends.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    current: f64,
    increment: f64,
    suffix: String,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / COUNTER_STEPS as f64,
            suffix: suffix.into(),
            done: false,
        }
    }

    /// Interval between ticks in milliseconds.
    pub fn step_ms() -> u32 {
        COUNTER_DURATION_MS / COUNTER_STEPS
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        // A non-positive target has nothing to count through.
        if self.increment <= 0.0 || self.current >= self.target as f64 {
            self.done = true;
            return Some(format!("{}{}", self.target, self.suffix));
        }
        Some(format!("{}{}", self.current.floor() as i64, self.suffix))
    }
}

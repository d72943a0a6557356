//! Animated numeric counters ("500+ projects delivered").
//!
//! A [`CountUp`] is a pure description: value and formatted text are functions of
//! elapsed time. [`CountUpRun`] adds the one-shot start/complete events that a
//! view fires when the counter scrolls into view.

use crate::{
    animation::ease::Ease,
    foundation::{
        error::{ScrollError, ScrollResult},
        math::{decimal_places, lerp},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountDirection {
    #[default]
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CountUp {
    pub from: f64,
    pub to: f64,
    pub direction: CountDirection,
    /// Seconds before the counter starts moving.
    pub delay: f64,
    /// Seconds from start to end value.
    pub duration: f64,
    pub ease: Ease,
    /// Thousands separator. Empty disables grouping.
    pub separator: String,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            direction: CountDirection::Up,
            delay: 0.0,
            duration: 2.0,
            ease: Ease::OutCubic,
            separator: String::new(),
        }
    }
}

impl CountUp {
    pub fn to(to: f64) -> Self {
        Self {
            to,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ScrollResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollError::configuration("count-up bounds must be finite"));
        }
        if !(self.delay.is_finite() && self.delay >= 0.0) {
            return Err(ScrollError::configuration("count-up delay must be >= 0"));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ScrollError::configuration("count-up duration must be >= 0"));
        }
        Ok(())
    }

    pub fn start_value(&self) -> f64 {
        match self.direction {
            CountDirection::Up => self.from,
            CountDirection::Down => self.to,
        }
    }

    pub fn end_value(&self) -> f64 {
        match self.direction {
            CountDirection::Up => self.to,
            CountDirection::Down => self.from,
        }
    }

    pub fn total_secs(&self) -> f64 {
        self.delay + self.duration
    }

    pub fn value_at(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local.is_nan() || local <= 0.0 {
            return self.start_value();
        }
        if self.duration <= 0.0 || local >= self.duration {
            return self.end_value();
        }
        let t = self.ease.apply(local / self.duration);
        lerp(self.start_value(), self.end_value(), t)
    }

    fn decimals(&self) -> usize {
        decimal_places(self.from).max(decimal_places(self.to))
    }

    /// Formats `value` with the bounds' decimal count, rounding ties away from
    /// zero (`2.5` shows as `3`).
    pub fn format(&self, value: f64) -> String {
        let digits = to_fixed(value, self.decimals());
        if self.separator.is_empty() {
            return digits;
        }
        group_thousands(&digits, &self.separator)
    }

    pub fn text_at(&self, elapsed: f64) -> String {
        self.format(self.value_at(elapsed))
    }
}

/// Fixed-point text of `value`, rounded half away from zero on its shortest
/// decimal representation.
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let (sign, rest) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 * separator.len());
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountUpEvent {
    Started,
    Completed,
}

/// Playback of a [`CountUp`] driven by frame deltas.
#[derive(Clone, Debug)]
pub struct CountUpRun {
    spec: CountUp,
    elapsed: f64,
    started: bool,
    completed: bool,
}

impl CountUpRun {
    pub fn new(spec: CountUp) -> ScrollResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            elapsed: 0.0,
            started: false,
            completed: false,
        })
    }

    pub fn spec(&self) -> &CountUp {
        &self.spec
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn value(&self) -> f64 {
        self.spec.value_at(self.elapsed)
    }

    pub fn text(&self) -> String {
        self.spec.text_at(self.elapsed)
    }

    /// Advances playback by `dt` seconds and returns the events crossed, in order.
    pub fn advance(&mut self, dt: f64) -> Vec<CountUpEvent> {
        let mut events = Vec::new();
        if self.completed {
            return events;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if !self.started && self.elapsed >= self.spec.delay {
            self.started = true;
            events.push(CountUpEvent::Started);
        }
        if self.started && self.elapsed >= self.spec.total_secs() {
            self.completed = true;
            tracing::trace!(value = self.spec.end_value(), "count-up completed");
            events.push(CountUpEvent::Completed);
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/countup.rs"]
mod tests;

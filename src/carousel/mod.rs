//! Index state for the site's carousels.
//!
//! [`Carousel`] is the project slider driven by previous/next buttons;
//! [`AutoAdvance`] cycles it on a fixed interval like the circular image
//! slideshow does.

use std::time::Duration;

use crate::foundation::{
    core::Viewport,
    error::{ScrollError, ScrollResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self, i: usize) -> bool {
        !self.is_empty() && i == self.index
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> ScrollResult<()> {
        if index >= self.len {
            return Err(ScrollError::validation(format!(
                "carousel index {index} out of range (len {})",
                self.len
            )));
        }
        self.index = index;
        Ok(())
    }

    /// `"03 / 12"`, one-based and zero-padded to two digits.
    pub fn counter_label(&self) -> String {
        let shown = if self.is_empty() { 0 } else { self.index + 1 };
        format!("{shown:02} / {:02}", self.len)
    }

    /// Leftward translation of the slide track, in percent of the track width.
    pub fn track_offset_percent(&self, layout: SlideLayout) -> f64 {
        self.index as f64 * layout.item_width_percent()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideLayout {
    /// One full-width slide.
    Single,
    /// Slides take 60% so the next one peeks in.
    Peek,
}

impl SlideLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_mobile() {
            Self::Single
        } else {
            Self::Peek
        }
    }

    pub fn item_width_percent(self) -> f64 {
        match self {
            Self::Single => 100.0,
            Self::Peek => 60.0,
        }
    }
}

/// Timer that advances a [`Carousel`] once per elapsed interval.
#[derive(Clone, Debug)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
}

impl AutoAdvance {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

    pub fn new(interval: Duration) -> ScrollResult<Self> {
        if interval.is_zero() {
            return Err(ScrollError::configuration(
                "auto-advance interval must be > 0",
            ));
        }
        Ok(Self {
            interval,
            elapsed: Duration::ZERO,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Elapsed time is banked, so one long frame can advance several slides.
    /// Carousels with at most one slide never advance.
    pub fn tick(&mut self, carousel: &mut Carousel, dt: Duration) -> usize {
        if carousel.len() <= 1 {
            self.elapsed = Duration::ZERO;
            return 0;
        }
        self.elapsed += dt;
        let mut steps = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            carousel.next();
            steps += 1;
        }
        steps
    }

    /// Restarts the interval, e.g. after a manual navigation.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            elapsed: Duration::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/carousel.rs"]
mod tests;

use crate::foundation::{
    core::{Progress, Viewport},
    error::{ScrollError, ScrollResult},
    math::inverse_lerp,
};

/// How a trigger region is laid out relative to its element, before the
/// viewport is known.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriggerSpec {
    /// Scroll length of the region, in viewport heights.
    pub distance_viewports: f64,
    /// Keep the element fixed on screen while the region is scrolled through.
    pub pin: bool,
}

impl Default for TriggerSpec {
    fn default() -> Self {
        Self {
            distance_viewports: 1.5,
            pin: true,
        }
    }
}

impl TriggerSpec {
    /// Region starting when the element's top reaches the viewport top.
    pub fn resolve(&self, element_top: f64, viewport: Viewport) -> ScrollResult<ScrollTrigger> {
        viewport.validate()?;
        let distance = viewport.height * self.distance_viewports;
        ScrollTrigger::new(element_top, element_top + distance, self.pin)
    }
}

/// A resolved scroll region `[start, end]` in document scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTrigger {
    pub start: f64,
    pub end: f64,
    pub pin: bool,
}

impl ScrollTrigger {
    pub fn new(start: f64, end: f64, pin: bool) -> ScrollResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollError::configuration(
                "scroll trigger offsets must be finite",
            ));
        }
        if end <= start {
            return Err(ScrollError::configuration(format!(
                "scroll trigger end ({end}) must be past start ({start})"
            )));
        }
        Ok(Self { start, end, pin })
    }

    pub fn distance(&self) -> f64 {
        self.end - self.start
    }

    pub fn progress_at(&self, scroll_y: f64) -> Progress {
        Progress::new(inverse_lerp(self.start, self.end, scroll_y))
    }

    pub fn is_active(&self, scroll_y: f64) -> bool {
        self.start <= scroll_y && scroll_y <= self.end
    }

    /// Extra document height inserted after a pinned element so content below
    /// it scrolls in only once the region ends.
    pub fn pin_spacing(&self) -> f64 {
        if self.pin { self.distance() } else { 0.0 }
    }

    /// Translation that keeps a pinned element fixed on screen at `scroll_y`.
    pub fn pin_offset(&self, scroll_y: f64) -> f64 {
        if !self.pin {
            return 0.0;
        }
        (scroll_y - self.start).clamp(0.0, self.distance())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;

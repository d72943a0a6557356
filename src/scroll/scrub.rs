use crate::{
    animation::ease::Ease,
    foundation::{
        core::Progress,
        error::{ScrollError, ScrollResult},
        math::lerp,
    },
};

/// Smoothed follower for raw scroll progress ("scrub: N seconds").
///
/// Every new target restarts a catch-up from wherever the smoothed value is
/// now, eased over `lag` seconds. The value never overshoots and lands
/// exactly on the target once the lag has elapsed.
#[derive(Clone, Debug)]
pub struct Scrub {
    lag: f64,
    ease: Ease,
    from: f64,
    target: f64,
    current: f64,
    elapsed: f64,
}

impl Scrub {
    pub const DEFAULT_LAG_SECS: f64 = 1.0;

    pub fn new(lag: f64) -> ScrollResult<Self> {
        if !(lag.is_finite() && lag >= 0.0) {
            return Err(ScrollError::configuration(format!(
                "scrub lag must be finite and >= 0 (got {lag})"
            )));
        }
        Ok(Self {
            lag,
            ease: Ease::OutCubic,
            from: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
        })
    }

    /// Tracks raw progress with no smoothing.
    pub fn immediate() -> Self {
        Self {
            lag: 0.0,
            ease: Ease::Linear,
            from: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn lag(&self) -> f64 {
        self.lag
    }

    pub fn current(&self) -> Progress {
        Progress::new(self.current)
    }

    pub fn target(&self) -> Progress {
        Progress::new(self.target)
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn set_target(&mut self, target: Progress) {
        let target = target.get();
        if target == self.target {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        if self.lag == 0.0 {
            self.current = target;
        }
    }

    /// Snaps both the smoothed value and the target, e.g. after a resize.
    pub fn jump_to(&mut self, progress: Progress) {
        let p = progress.get();
        self.from = p;
        self.target = p;
        self.current = p;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f64) -> Progress {
        if self.is_settled() {
            return self.current();
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let t = if self.lag == 0.0 {
            1.0
        } else {
            (self.elapsed / self.lag).min(1.0)
        };
        self.current = if t >= 1.0 {
            self.target
        } else {
            lerp(self.from, self.target, self.ease.apply(t))
        };
        self.current()
    }
}

impl Default for Scrub {
    fn default() -> Self {
        Self {
            lag: Self::DEFAULT_LAG_SECS,
            ..Self::immediate()
        }
        .with_ease(Ease::OutCubic)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scrub.rs"]
mod tests;

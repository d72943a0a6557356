use crate::{
    animation::interpolate::Segment,
    expand::{
        config::GeometryConfig,
        frame::{ExpandFrame, GeometryFrame, OpacityFrame},
    },
    foundation::{
        core::Progress,
        error::{ScrollError, ScrollResult},
        math::clamp01,
    },
    render::target::{ApplyOutcome, RenderTarget},
};

/// Phase 2 starts from this fraction of the starting corner radius.
const PHASE1_RADIUS_FACTOR: f64 = 0.6;
const SIDE_TEXT_FADE_END: f64 = 0.08;
const SIDE_TEXT_FADE_RATE: f64 = 12.5;
const OVERLAY_FADE_START: f64 = 0.2;
const OVERLAY_FADE_END: f64 = 0.6;
const OVERLAY_FADE_RATE: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Grow outward and downward; the top edge stays put.
    Expand,
    /// Grow up and down equally until the viewport is filled.
    Fill,
}

/// Maps scroll progress to the expanding image's geometry and the fades of the
/// text around and on top of it.
///
/// [`geometry`](Self::geometry), [`opacity`](Self::opacity) and
/// [`frame`](Self::frame) are pure. The only state is the last frame handed to a
/// render target, so re-applying the same progress is a no-op.
#[derive(Clone, Debug)]
pub struct ScrollProgressAnimator {
    config: GeometryConfig,
    last_applied: Option<ExpandFrame>,
}

impl ScrollProgressAnimator {
    pub fn new(config: GeometryConfig) -> ScrollResult<Self> {
        config.validate()?;
        tracing::debug!(?config, "scroll progress animator configured");
        Ok(Self {
            config,
            last_applied: None,
        })
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Swaps in a config derived for a new viewport. The memo is dropped so the
    /// next apply always reaches the target.
    pub fn reconfigure(&mut self, config: GeometryConfig) -> ScrollResult<()> {
        config.validate()?;
        tracing::debug!(?config, "scroll progress animator reconfigured");
        self.config = config;
        self.last_applied = None;
        Ok(())
    }

    pub fn last_applied(&self) -> Option<&ExpandFrame> {
        self.last_applied.as_ref()
    }

    pub fn phase(&self, progress: impl Into<Progress>) -> Phase {
        if progress.into().get() <= self.config.phase1_end {
            Phase::Expand
        } else {
            Phase::Fill
        }
    }

    pub fn geometry(&self, progress: impl Into<Progress>) -> GeometryFrame {
        let p = progress.into().get();
        let c = &self.config;
        let start = GeometryFrame {
            width: c.start_width,
            height: c.start_height,
            y_offset: 0.0,
            border_radius: c.start_border_radius,
        };
        let docked = GeometryFrame {
            width: c.viewport_width,
            height: c.distance_to_bottom(),
            y_offset: 0.0,
            border_radius: c.start_border_radius * PHASE1_RADIUS_FACTOR,
        };
        let filled = GeometryFrame {
            width: c.viewport_width,
            height: c.viewport_height,
            y_offset: -(c.viewport_height - docked.height) / 2.0,
            border_radius: 0.0,
        };

        if p <= c.phase1_end {
            Segment::new(start, docked).at(p / c.phase1_end)
        } else {
            Segment::new(docked, filled).at((p - c.phase1_end) / (1.0 - c.phase1_end))
        }
    }

    pub fn opacity(&self, progress: impl Into<Progress>) -> OpacityFrame {
        let p = progress.into().get();
        OpacityFrame {
            side_text: 1.0 - ramp(p, 0.0, SIDE_TEXT_FADE_END, SIDE_TEXT_FADE_RATE),
            overlay_text: ramp(p, OVERLAY_FADE_START, OVERLAY_FADE_END, OVERLAY_FADE_RATE),
        }
    }

    pub fn frame(&self, progress: impl Into<Progress>) -> ExpandFrame {
        let progress = progress.into();
        ExpandFrame {
            progress,
            geometry: self.geometry(progress),
            opacity: self.opacity(progress),
        }
    }

    /// Computes the frame for `progress` and hands it to `target`.
    ///
    /// A missing target is not an error: the owning view may already be
    /// unmounting. The memo is left untouched in that case.
    pub fn apply<T: RenderTarget + ?Sized>(
        &mut self,
        progress: impl Into<Progress>,
        target: Option<&mut T>,
    ) -> ApplyOutcome {
        let frame = self.frame(progress);
        let Some(target) = target else {
            return ApplyOutcome::TargetUnavailable;
        };
        if self.last_applied.is_some_and(|last| last.bit_eq(&frame)) {
            return ApplyOutcome::Unchanged;
        }
        self.push(frame, target)
    }

    /// Like [`apply`](Self::apply) but ignores the memo.
    pub fn force_apply<T: RenderTarget + ?Sized>(
        &mut self,
        progress: impl Into<Progress>,
        target: Option<&mut T>,
    ) -> ApplyOutcome {
        let frame = self.frame(progress);
        match target {
            Some(target) => self.push(frame, target),
            None => ApplyOutcome::TargetUnavailable,
        }
    }

    /// Like [`apply`](Self::apply), but a missing target is reported as an error.
    pub fn try_apply<T: RenderTarget + ?Sized>(
        &mut self,
        progress: impl Into<Progress>,
        target: Option<&mut T>,
    ) -> ScrollResult<ApplyOutcome> {
        match self.apply(progress, target) {
            ApplyOutcome::TargetUnavailable => Err(ScrollError::TargetUnavailable),
            outcome => Ok(outcome),
        }
    }

    fn push<T: RenderTarget + ?Sized>(
        &mut self,
        frame: ExpandFrame,
        target: &mut T,
    ) -> ApplyOutcome {
        tracing::trace!(
            progress = frame.progress.get(),
            width = frame.geometry.width,
            height = frame.geometry.height,
            "apply expand frame"
        );
        target.apply_frame(&frame);
        self.last_applied = Some(frame);
        ApplyOutcome::Applied
    }
}

/// `(p - start) * rate` clamped to `[0, 1]`, pinned to exact 0/1 at the nominal
/// boundaries (`(0.6 - 0.2) * 2.5` rounds to just below 1).
fn ramp(p: f64, start: f64, end: f64, rate: f64) -> f64 {
    if p <= start {
        0.0
    } else if p >= end {
        1.0
    } else {
        clamp01((p - start) * rate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expand/animator.rs"]
mod tests;

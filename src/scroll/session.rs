use crate::{
    expand::{
        animator::ScrollProgressAnimator,
        config::{
            DEFAULT_INITIAL_TOP_OFFSET_RATIO, DEFAULT_PHASE1_END, DEFAULT_START_BORDER_RADIUS,
            GeometryConfig, StartSize,
        },
    },
    foundation::{
        core::{Progress, Viewport},
        error::{ScrollError, ScrollResult},
    },
    render::target::{ApplyOutcome, RenderTarget},
    scroll::{
        scrub::Scrub,
        trigger::{ScrollTrigger, TriggerSpec},
    },
};

/// Everything needed to (re)build a session's geometry for any viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub trigger: TriggerSpec,
    /// Seconds the scrubbed progress takes to catch up with the scroll position.
    pub scrub_lag: f64,
    pub start: StartSize,
    pub start_border_radius: f64,
    pub phase1_end: f64,
    pub initial_top_offset_ratio: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerSpec::default(),
            scrub_lag: Scrub::DEFAULT_LAG_SECS,
            start: StartSize::default(),
            start_border_radius: DEFAULT_START_BORDER_RADIUS,
            phase1_end: DEFAULT_PHASE1_END,
            initial_top_offset_ratio: DEFAULT_INITIAL_TOP_OFFSET_RATIO,
        }
    }
}

impl SessionConfig {
    pub fn geometry_for(&self, viewport: Viewport) -> ScrollResult<GeometryConfig> {
        let cfg = GeometryConfig::for_viewport(viewport, self.start)?
            .with_start_border_radius(self.start_border_radius)
            .with_phase1_end(self.phase1_end)
            .with_initial_top_offset_ratio(self.initial_top_offset_ratio);
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Active,
    Disposed,
}

/// One mounted expanding-image section: trigger region, scrub smoothing,
/// animator and the element it drives.
///
/// The host forwards scroll offsets, frame ticks and resizes. After
/// [`dispose`](Self::dispose) every call is a no-op and no frame reaches the
/// target again.
pub struct ScrollSession<T: RenderTarget> {
    config: SessionConfig,
    element_top: f64,
    viewport: Viewport,
    trigger: ScrollTrigger,
    scrub: Scrub,
    animator: ScrollProgressAnimator,
    target: Option<T>,
    state: SessionState,
}

impl<T: RenderTarget> ScrollSession<T> {
    /// Builds the session and applies the starting frame.
    #[tracing::instrument(skip(config, target))]
    pub fn mount(
        config: SessionConfig,
        element_top: f64,
        viewport: Viewport,
        target: T,
    ) -> ScrollResult<Self> {
        let trigger = config.trigger.resolve(element_top, viewport)?;
        let animator = ScrollProgressAnimator::new(config.geometry_for(viewport)?)?;
        let scrub = Scrub::new(config.scrub_lag)?;

        let mut session = Self {
            config,
            element_top,
            viewport,
            trigger,
            scrub,
            animator,
            target: Some(target),
            state: SessionState::Active,
        };
        session.animator.apply(Progress::START, session.target.as_mut());
        tracing::debug!(
            start = trigger.start,
            end = trigger.end,
            "scroll session mounted"
        );
        Ok(session)
    }

    pub fn is_disposed(&self) -> bool {
        self.state == SessionState::Disposed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    pub fn animator(&self) -> &ScrollProgressAnimator {
        &self.animator
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Smoothed progress as of the last tick.
    pub fn progress(&self) -> Progress {
        self.scrub.current()
    }

    /// Records a new scroll offset; the frame is applied on the next tick.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Progress {
        if self.is_disposed() {
            return self.scrub.current();
        }
        let raw = self.trigger.progress_at(scroll_y);
        self.scrub.set_target(raw);
        raw
    }

    /// Advances scrub smoothing by `dt` seconds and applies the resulting frame.
    pub fn tick(&mut self, dt: f64) -> ApplyOutcome {
        if self.is_disposed() {
            return ApplyOutcome::Disposed;
        }
        let p = self.scrub.advance(dt);
        self.animator.apply(p, self.target.as_mut())
    }

    /// Re-derives trigger and geometry for the new viewport and re-applies the
    /// current progress.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, viewport: Viewport) -> ScrollResult<ApplyOutcome> {
        if self.is_disposed() {
            return Ok(ApplyOutcome::Disposed);
        }
        let trigger = self.config.trigger.resolve(self.element_top, viewport)?;
        let geometry = self.config.geometry_for(viewport)?;
        self.animator.reconfigure(geometry)?;
        self.trigger = trigger;
        self.viewport = viewport;

        let p = self.scrub.current();
        Ok(self.animator.force_apply(p, self.target.as_mut()))
    }

    /// Moves the region start, e.g. after layout above the section changed.
    pub fn set_element_top(&mut self, element_top: f64) -> ScrollResult<()> {
        if self.is_disposed() {
            return Err(ScrollError::validation("scroll session is disposed"));
        }
        self.trigger = self.config.trigger.resolve(element_top, self.viewport)?;
        self.element_top = element_top;
        Ok(())
    }

    /// Hands the target back; later applies report
    /// [`ApplyOutcome::TargetUnavailable`].
    pub fn detach_target(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Stops the session and releases the target. Idempotent.
    #[tracing::instrument(skip(self))]
    pub fn dispose(&mut self) -> Option<T> {
        if self.is_disposed() {
            return None;
        }
        self.state = SessionState::Disposed;
        tracing::debug!("scroll session disposed");
        self.target.take()
    }
}

impl<T: RenderTarget> Drop for ScrollSession<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/session.rs"]
mod tests;

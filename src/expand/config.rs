use crate::foundation::{
    core::{Size, Viewport},
    error::{ScrollError, ScrollResult},
};

/// Geometry of the expanding image, fixed for the lifetime of one viewport size.
///
/// Derive it once on mount (usually via [`GeometryConfig::for_viewport`]) and
/// again on every resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryConfig {
    pub start_width: f64,
    pub start_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    #[serde(default = "default_start_border_radius")]
    pub start_border_radius: f64,
    /// Progress at which phase 1 (grow down and out) hands over to phase 2
    /// (grow up and down to fill the viewport). Strictly inside `(0, 1)`.
    #[serde(default = "default_phase1_end")]
    pub phase1_end: f64,
    /// Fraction of the viewport height above the image's top edge when pinned.
    #[serde(default = "default_initial_top_offset_ratio")]
    pub initial_top_offset_ratio: f64,
}

pub const DEFAULT_START_BORDER_RADIUS: f64 = 56.0;
pub const DEFAULT_PHASE1_END: f64 = 0.4;
pub const DEFAULT_INITIAL_TOP_OFFSET_RATIO: f64 = 0.4;

fn default_start_border_radius() -> f64 {
    DEFAULT_START_BORDER_RADIUS
}

fn default_phase1_end() -> f64 {
    DEFAULT_PHASE1_END
}

fn default_initial_top_offset_ratio() -> f64 {
    DEFAULT_INITIAL_TOP_OFFSET_RATIO
}

impl GeometryConfig {
    pub fn new(start: Size, viewport: Viewport) -> Self {
        Self {
            start_width: start.width,
            start_height: start.height,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            start_border_radius: DEFAULT_START_BORDER_RADIUS,
            phase1_end: DEFAULT_PHASE1_END,
            initial_top_offset_ratio: DEFAULT_INITIAL_TOP_OFFSET_RATIO,
        }
    }

    /// Start size derived from the viewport (see [`StartSize`]), validated.
    pub fn for_viewport(viewport: Viewport, overrides: StartSize) -> ScrollResult<Self> {
        let cfg = Self::new(overrides.resolve(viewport), viewport);
        cfg.validate()?;
        tracing::debug!(
            vw = viewport.width,
            vh = viewport.height,
            start_w = cfg.start_width,
            start_h = cfg.start_height,
            "derived expand geometry config"
        );
        Ok(cfg)
    }

    pub fn with_start_border_radius(mut self, radius: f64) -> Self {
        self.start_border_radius = radius;
        self
    }

    pub fn with_phase1_end(mut self, phase1_end: f64) -> Self {
        self.phase1_end = phase1_end;
        self
    }

    pub fn with_initial_top_offset_ratio(mut self, ratio: f64) -> Self {
        self.initial_top_offset_ratio = ratio;
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    pub fn start_size(&self) -> Size {
        Size::new(self.start_width, self.start_height)
    }

    /// Height from the pinned top edge to the bottom of the viewport.
    pub fn distance_to_bottom(&self) -> f64 {
        self.viewport_height - self.viewport_height * self.initial_top_offset_ratio
    }

    pub fn validate(&self) -> ScrollResult<()> {
        self.viewport().validate()?;
        positive("start_width", self.start_width)?;
        positive("start_height", self.start_height)?;
        if !(self.start_border_radius.is_finite() && self.start_border_radius >= 0.0) {
            return Err(ScrollError::configuration(format!(
                "start_border_radius must be finite and >= 0 (got {})",
                self.start_border_radius
            )));
        }
        open_unit("phase1_end", self.phase1_end)?;
        open_unit("initial_top_offset_ratio", self.initial_top_offset_ratio)?;
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> ScrollResult<()> {
    if v.is_finite() && v > 0.0 {
        return Ok(());
    }
    Err(ScrollError::configuration(format!(
        "{name} must be finite and > 0 (got {v})"
    )))
}

fn open_unit(name: &str, v: f64) -> ScrollResult<()> {
    if v > 0.0 && v < 1.0 {
        return Ok(());
    }
    Err(ScrollError::configuration(format!(
        "{name} must lie strictly between 0 and 1 (got {v})"
    )))
}

/// Explicit start dimensions; missing axes are derived from the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StartSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl StartSize {
    pub fn explicit(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Mobile viewports get a smaller thumbnail so it fits between the side text.
    pub fn derived(viewport: Viewport) -> Size {
        let (w_mul, h_mul, max_w, max_h) = if viewport.is_mobile() {
            (0.10, 0.08, 120.0, 80.0)
        } else {
            (0.12, 0.10, 140.0, 100.0)
        };
        Size::new(
            (viewport.width * w_mul).min(max_w),
            (viewport.height * h_mul).min(max_h),
        )
    }

    pub fn resolve(self, viewport: Viewport) -> Size {
        let derived = Self::derived(viewport);
        Size::new(
            self.width.unwrap_or(derived.width),
            self.height.unwrap_or(derived.height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expand/config.rs"]
mod tests;

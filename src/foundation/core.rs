use crate::foundation::error::{ScrollError, ScrollResult};

pub use kurbo::{Rect, RoundedRect, Size};

/// Normalized scroll progress through a pinned region.
///
/// Always within `[0, 1]`. Scroll listeners may report transient values
/// outside that range during fling or rubber-banding, so construction clamps
/// instead of rejecting. `NaN` maps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Visible viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Width below which the site switches to its mobile layout.
    pub const MOBILE_BREAKPOINT: f64 = 768.0;

    pub fn new(width: f64, height: f64) -> ScrollResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    pub fn validate(self) -> ScrollResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ScrollError::configuration(format!(
                "viewport width must be finite and > 0 (got {})",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ScrollError::configuration(format!(
                "viewport height must be finite and > 0 (got {})",
                self.height
            )));
        }
        Ok(())
    }

    pub fn is_mobile(self) -> bool {
        self.width < Self::MOBILE_BREAKPOINT
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl std::str::FromStr for Viewport {
    type Err = ScrollError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1200x800`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| ScrollError::validation(format!("expected WIDTHxHEIGHT, got '{s}'")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| ScrollError::validation(format!("invalid viewport '{s}': {e}")))
        };
        Self::new(parse(w)?, parse(h)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

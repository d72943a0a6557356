use crate::{
    animation::interpolate::Lerp,
    expand::config::GeometryConfig,
    foundation::core::{Progress, Rect, RoundedRect, Size},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryFrame {
    pub width: f64,
    pub height: f64,
    /// Vertical translation from the pinned position; negative moves up.
    pub y_offset: f64,
    pub border_radius: f64,
}

impl GeometryFrame {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Screen-space outline: horizontally centered, top edge at the pinned offset.
    pub fn to_rounded_rect(&self, config: &GeometryConfig) -> RoundedRect {
        let x0 = (config.viewport_width - self.width) / 2.0;
        let y0 = config.viewport_height * config.initial_top_offset_ratio + self.y_offset;
        Rect::new(x0, y0, x0 + self.width, y0 + self.height).to_rounded_rect(self.border_radius)
    }
}

impl Lerp for GeometryFrame {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            width: <f64 as Lerp>::lerp(&a.width, &b.width, t),
            height: <f64 as Lerp>::lerp(&a.height, &b.height, t),
            y_offset: <f64 as Lerp>::lerp(&a.y_offset, &b.y_offset, t),
            border_radius: <f64 as Lerp>::lerp(&a.border_radius, &b.border_radius, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpacityFrame {
    pub side_text: f64,
    pub overlay_text: f64,
}

impl Default for OpacityFrame {
    fn default() -> Self {
        Self {
            side_text: 1.0,
            overlay_text: 0.0,
        }
    }
}

impl OpacityFrame {
    /// Fully transparent elements stop receiving pointer events.
    pub fn side_text_interactive(&self) -> bool {
        self.side_text != 0.0
    }

    pub fn overlay_text_interactive(&self) -> bool {
        self.overlay_text != 0.0
    }
}

/// Everything a render target needs for one progress value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpandFrame {
    pub progress: Progress,
    pub geometry: GeometryFrame,
    pub opacity: OpacityFrame,
}

impl ExpandFrame {
    /// Bitwise comparison; stricter than `==` for `-0.0`.
    pub fn bit_eq(&self, other: &Self) -> bool {
        let a = self.bits();
        let b = other.bits();
        a == b
    }

    fn bits(&self) -> [u64; 7] {
        [
            self.progress.get().to_bits(),
            self.geometry.width.to_bits(),
            self.geometry.height.to_bits(),
            self.geometry.y_offset.to_bits(),
            self.geometry.border_radius.to_bits(),
            self.opacity.side_text.to_bits(),
            self.opacity.overlay_text.to_bits(),
        ]
    }
}

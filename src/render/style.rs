//! CSS-style projection of an [`ExpandFrame`].
//!
//! This is the thin adapter layer: a web host copies these declarations onto the
//! image and text elements verbatim.

use crate::{expand::frame::ExpandFrame, render::target::RenderTarget};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    pub declarations: Vec<(&'static str, String)>,
}

impl ElementStyle {
    fn push(&mut self, property: &'static str, value: String) {
        self.declarations.push((property, value));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ExpandStyles {
    pub image: ElementStyle,
    pub side_text: ElementStyle,
    pub overlay_text: ElementStyle,
}

impl ExpandStyles {
    pub fn from_frame(frame: &ExpandFrame) -> Self {
        let g = &frame.geometry;
        let mut image = ElementStyle::default();
        image.push("width", px(g.width));
        image.push("height", px(g.height));
        image.push("border-radius", px(g.border_radius));
        image.push("transform", format!("translate(0px, {})", px(g.y_offset)));

        Self {
            image,
            side_text: fade_style(frame.opacity.side_text),
            overlay_text: fade_style(frame.opacity.overlay_text),
        }
    }
}

fn fade_style(opacity: f64) -> ElementStyle {
    let mut style = ElementStyle::default();
    style.push("opacity", trim_float(opacity));
    let events = if opacity == 0.0 { "none" } else { "auto" };
    style.push("pointer-events", events.to_string());
    style
}

fn px(v: f64) -> String {
    format!("{}px", trim_float(v))
}

/// Three decimals are below a device pixel; trailing zeros are dropped.
fn trim_float(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Render target that keeps the latest style projection.
#[derive(Clone, Debug, Default)]
pub struct StyleTarget {
    current: Option<ExpandStyles>,
    writes: usize,
}

impl StyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ExpandStyles> {
        self.current.as_ref()
    }

    /// Number of frames written so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RenderTarget for StyleTarget {
    fn apply_frame(&mut self, frame: &ExpandFrame) {
        self.current = Some(ExpandStyles::from_frame(frame));
        self.writes += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;

//! scrollmotion is the motion engine behind a scroll-driven brochure site.
//!
//! The centerpiece is [`ScrollProgressAnimator`]: a hero image pinned in the
//! viewport grows from a small rounded thumbnail to a full-bleed background as
//! the reader scrolls, while the captions beside it fade out and a headline on
//! top of it fades in.
//!
//! # Pipeline overview
//!
//! 1. **Trigger**: scroll offset -> raw [`Progress`] through a pinned region ([`ScrollTrigger`])
//! 2. **Scrub**: raw progress -> smoothed progress ([`Scrub`])
//! 3. **Animate**: progress -> [`ExpandFrame`] (pure; [`ScrollProgressAnimator`])
//! 4. **Apply**: frame -> host element via a [`RenderTarget`] adapter
//!
//! [`ScrollSession`] wires the four stages together and owns the
//! mount/resize/dispose lifecycle.
//!
//! Smaller pieces used around the site live alongside: [`Carousel`] and
//! [`AutoAdvance`] for sliders, [`CountUp`] for animated statistics.
#![forbid(unsafe_code)]

mod animation;
mod carousel;
mod expand;
mod foundation;
mod render;
mod scroll;

pub use animation::countup::{CountDirection, CountUp, CountUpEvent, CountUpRun};
pub use animation::ease::Ease;
pub use animation::interpolate::{Lerp, Segment};
pub use carousel::{AutoAdvance, Carousel, SlideLayout};
pub use expand::animator::{Phase, ScrollProgressAnimator};
pub use expand::config::{
    DEFAULT_INITIAL_TOP_OFFSET_RATIO, DEFAULT_PHASE1_END, DEFAULT_START_BORDER_RADIUS,
    GeometryConfig, StartSize,
};
pub use expand::frame::{ExpandFrame, GeometryFrame, OpacityFrame};
pub use foundation::core::{Progress, Rect, RoundedRect, Size, Viewport};
pub use foundation::error::{ScrollError, ScrollResult};
pub use foundation::math::{clamp01, inverse_lerp, lerp};
pub use render::style::{ElementStyle, ExpandStyles, StyleTarget};
pub use render::target::{ApplyOutcome, RecordingTarget, RenderTarget};
pub use scroll::scrub::Scrub;
pub use scroll::session::{ScrollSession, SessionConfig};
pub use scroll::trigger::{ScrollTrigger, TriggerSpec};

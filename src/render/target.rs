use crate::expand::frame::ExpandFrame;

/// Host-side sink for computed frames (a DOM adapter, a test recorder, ...).
pub trait RenderTarget {
    fn apply_frame(&mut self, frame: &ExpandFrame);
}

impl<F> RenderTarget for F
where
    F: FnMut(&ExpandFrame),
{
    fn apply_frame(&mut self, frame: &ExpandFrame) {
        self(frame)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    Applied,
    /// Same frame as the last one applied; the target was not touched.
    Unchanged,
    TargetUnavailable,
    /// The owning session was disposed.
    Disposed,
}

impl ApplyOutcome {
    pub fn reached_target(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Keeps every frame it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    pub frames: Vec<ExpandFrame>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ExpandFrame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl RenderTarget for RecordingTarget {
    fn apply_frame(&mut self, frame: &ExpandFrame) {
        self.frames.push(*frame);
    }
}

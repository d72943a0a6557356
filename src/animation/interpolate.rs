use crate::foundation::math;

/// Values the animator can blend between two keyed states.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        math::lerp(*a, *b, t)
    }
}

/// A linear segment between two values over a local `[0, 1]` parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    pub from: T,
    pub to: T,
}

impl<T: Lerp> Segment<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    pub fn at(&self, t: f64) -> T {
        T::lerp(&self.from, &self.to, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;

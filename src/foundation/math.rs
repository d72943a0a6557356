/// Linear interpolation for `t` in `[0, 1]`.
///
/// Returns `b` exactly at `t >= 1` and never leaves `[a, b]`, so a saturated
/// endpoint compares equal to its target even for fractional inputs.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return b;
    }
    let v = a + (b - a) * t;
    if a <= b { v.max(a).min(b) } else { v.max(b).min(a) }
}

pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// Position of `v` inside `[a, b]`, clamped to `[0, 1]`. Degenerate ranges map to `1`
/// once `v` reaches `a`.
pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span.abs() <= f64::EPSILON {
        return if v >= a { 1.0 } else { 0.0 };
    }
    clamp01((v - a) / span)
}

/// Number of significant fractional digits in the shortest round-trip representation.
pub(crate) fn decimal_places(v: f64) -> usize {
    let s = format!("{v}");
    match s.split_once('.') {
        Some((_, frac)) if frac.bytes().any(|b| b != b'0') => frac.len(),
        _ => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

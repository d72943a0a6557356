use super::*;
use crate::{
    expand::config::{GeometryConfig, StartSize},
    foundation::core::{Size, Viewport},
    render::target::RecordingTarget,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn reference_config() -> GeometryConfig {
    GeometryConfig::new(
        Size::new(140.0, 100.0),
        Viewport::new(1200.0, 800.0).unwrap(),
    )
    .with_start_border_radius(56.0)
    .with_phase1_end(0.4)
}

fn animator() -> ScrollProgressAnimator {
    ScrollProgressAnimator::new(reference_config()).unwrap()
}

#[test]
fn start_frame_matches_configured_start() {
    let g = animator().geometry(0.0);
    assert_eq!(
        g,
        GeometryFrame {
            width: 140.0,
            height: 100.0,
            y_offset: 0.0,
            border_radius: 56.0,
        }
    );
}

#[test]
fn end_frame_fills_viewport() {
    let a = animator();
    let g = a.geometry(1.0);
    let distance_to_bottom = a.config().distance_to_bottom();
    assert_eq!(g.width, 1200.0);
    assert_eq!(g.height, 800.0);
    assert_eq!(g.y_offset, -(800.0 - distance_to_bottom) / 2.0);
    assert_eq!(g.y_offset, -160.0);
    assert_eq!(g.border_radius, 0.0);
}

#[test]
fn phase_one_midpoint_scenario() {
    let g = animator().geometry(0.2);
    assert_eq!(g.width, 670.0);
    assert!(approx(g.border_radius, 44.8), "{}", g.border_radius);
    assert!(approx(g.height, 290.0), "{}", g.height);
    assert_eq!(g.y_offset, 0.0);
}

#[test]
fn phase_two_midpoint_scenario() {
    let g = animator().geometry(0.7);
    assert_eq!(g.width, 1200.0);
    assert!(approx(g.height, 640.0), "{}", g.height);
    assert!(approx(g.y_offset, -80.0), "{}", g.y_offset);
    assert!(approx(g.border_radius, 16.8), "{}", g.border_radius);
}

#[test]
fn width_is_linear_and_non_decreasing_in_phase_one() {
    let a = animator();
    let mut prev = a.geometry(0.0).width;
    for i in 1..=40 {
        let p = f64::from(i) * 0.01;
        let w = a.geometry(p).width;
        assert!(w >= prev, "p={p}: {w} < {prev}");
        let expected = 140.0 + (1200.0 - 140.0) * (p / 0.4);
        assert!(approx(w, expected), "p={p}: {w} vs {expected}");
        prev = w;
    }
}

#[test]
fn width_is_saturated_in_phase_two() {
    let a = animator();
    assert_eq!(a.geometry(0.4).width, 1200.0);
    for i in 41..=100 {
        let p = f64::from(i) * 0.01;
        assert_eq!(a.geometry(p).width, 1200.0, "p={p}");
    }
}

#[test]
fn fractional_viewport_saturates_width_exactly() {
    let config = GeometryConfig::for_viewport(
        Viewport::new(300.3, 800.0).unwrap(),
        StartSize::default(),
    )
    .unwrap();
    let a = ScrollProgressAnimator::new(config).unwrap();
    let phase1_end = a.config().phase1_end;

    assert_eq!(a.geometry(phase1_end).width, 300.3);
    assert_eq!(
        a.geometry(phase1_end).height,
        a.config().distance_to_bottom()
    );
    for i in 0..=20 {
        let p = phase1_end + (1.0 - phase1_end) * f64::from(i) / 20.0;
        assert_eq!(a.geometry(p).width, 300.3, "p={p}");
    }
    assert_eq!(a.geometry(1.0).height, 800.0);
}

#[test]
fn phase_endpoints_blend_through_segments() {
    let a = animator();
    let docked = a.geometry(0.4);
    let filled = a.geometry(1.0);
    let mid = Segment::new(docked, filled).at(0.5);
    let g = a.geometry(0.7);
    assert!(approx(mid.height, g.height));
    assert!(approx(mid.y_offset, g.y_offset));
    assert!(approx(mid.border_radius, g.border_radius));
    assert_eq!(mid.width, g.width);
}

#[test]
fn phases_meet_at_the_boundary() {
    let a = animator();
    let at = a.geometry(0.4);
    let just_after = a.geometry(0.4 + 1e-12);
    assert_eq!(a.phase(0.4), Phase::Expand);
    assert_eq!(a.phase(0.4 + 1e-12), Phase::Fill);
    assert!(approx(at.height, just_after.height));
    assert!(approx(at.border_radius, just_after.border_radius));
    assert!(approx(at.y_offset, just_after.y_offset));
}

#[test]
fn height_and_radius_are_monotonic_across_both_phases() {
    let a = animator();
    let mut prev = a.geometry(0.0);
    for i in 1..=100 {
        let g = a.geometry(f64::from(i) * 0.01);
        assert!(g.height >= prev.height);
        assert!(g.border_radius <= prev.border_radius);
        assert!(g.y_offset <= prev.y_offset);
        prev = g;
    }
}

#[test]
fn side_text_fades_out_by_eight_percent() {
    let a = animator();
    assert_eq!(a.opacity(0.0).side_text, 1.0);
    assert!(approx(a.opacity(0.04).side_text, 0.5));
    for p in [0.08, 0.081, 0.1, 0.5, 1.0] {
        assert_eq!(a.opacity(p).side_text, 0.0, "p={p}");
    }
}

#[test]
fn overlay_text_fades_in_between_twenty_and_sixty_percent() {
    let a = animator();
    for p in [0.0, 0.1, 0.2] {
        assert_eq!(a.opacity(p).overlay_text, 0.0, "p={p}");
    }
    assert!(approx(a.opacity(0.4).overlay_text, 0.5));
    for p in [0.6, 0.61, 0.8, 1.0] {
        assert_eq!(a.opacity(p).overlay_text, 1.0, "p={p}");
    }
}

#[test]
fn interactivity_follows_exact_zero_opacity() {
    let a = animator();
    let start = a.opacity(0.0);
    assert!(start.side_text_interactive());
    assert!(!start.overlay_text_interactive());

    let end = a.opacity(1.0);
    assert!(!end.side_text_interactive());
    assert!(end.overlay_text_interactive());
}

#[test]
fn out_of_range_progress_is_clamped() {
    let a = animator();
    assert_eq!(a.geometry(-0.5), a.geometry(0.0));
    assert_eq!(a.geometry(1.5), a.geometry(1.0));
    assert_eq!(a.opacity(-3.0), a.opacity(0.0));
    assert_eq!(a.frame(f64::NAN).progress.get(), 0.0);
}

#[test]
fn repeated_sampling_is_bit_identical() {
    let a = animator();
    let b = animator();
    for i in 0..=64 {
        let p = f64::from(i) / 64.0;
        assert!(a.frame(p).bit_eq(&a.frame(p)));
        assert!(a.frame(p).bit_eq(&b.frame(p)));
    }
}

#[test]
fn construction_rejects_degenerate_phase_boundary() {
    for bad in [0.0, 1.0] {
        let err = ScrollProgressAnimator::new(reference_config().with_phase1_end(bad)).unwrap_err();
        assert!(matches!(err, ScrollError::Configuration(_)));
    }
}

#[test]
fn apply_skips_identical_frames() {
    let mut a = animator();
    let mut target = RecordingTarget::new();

    assert_eq!(a.apply(0.3, Some(&mut target)), ApplyOutcome::Applied);
    assert_eq!(a.apply(0.3, Some(&mut target)), ApplyOutcome::Unchanged);
    assert_eq!(a.apply(0.5, Some(&mut target)), ApplyOutcome::Applied);
    assert_eq!(a.force_apply(0.5, Some(&mut target)), ApplyOutcome::Applied);
    assert_eq!(target.len(), 3);
    assert_eq!(a.last_applied(), target.last());
}

#[test]
fn apply_without_target_is_a_noop() {
    let mut a = animator();
    assert_eq!(
        a.apply(0.3, None::<&mut RecordingTarget>),
        ApplyOutcome::TargetUnavailable
    );
    assert!(a.last_applied().is_none());

    let err = a.try_apply(0.3, None::<&mut RecordingTarget>).unwrap_err();
    assert!(matches!(err, ScrollError::TargetUnavailable));
}

#[test]
fn closures_are_render_targets() {
    let mut a = animator();
    let mut widths = Vec::new();
    let mut sink = |f: &ExpandFrame| widths.push(f.geometry.width);
    a.apply(0.0, Some(&mut sink));
    a.apply(1.0, Some(&mut sink));
    assert_eq!(widths, vec![140.0, 1200.0]);
}

#[test]
fn reconfigure_resets_memo() {
    let mut a = animator();
    let mut target = RecordingTarget::new();
    a.apply(0.5, Some(&mut target));

    let resized = GeometryConfig::new(
        Size::new(140.0, 100.0),
        Viewport::new(1600.0, 900.0).unwrap(),
    );
    a.reconfigure(resized).unwrap();
    assert!(a.last_applied().is_none());
    assert_eq!(a.apply(1.0, Some(&mut target)), ApplyOutcome::Applied);
    assert_eq!(target.last().unwrap().geometry.width, 1600.0);

    assert!(a.reconfigure(resized.with_phase1_end(1.0)).is_err());
    assert_eq!(a.config().viewport_width, 1600.0);
}

#[test]
fn rounded_rect_is_centered_under_the_pinned_top() {
    let a = animator();
    let start = a.geometry(0.0).to_rounded_rect(a.config());
    let rect = start.rect();
    assert_eq!(rect.x0, 530.0);
    assert_eq!(rect.x1, 670.0);
    assert!(approx(rect.y0, 320.0));

    let end = a.geometry(1.0).to_rounded_rect(a.config()).rect();
    assert!(approx(end.y0, 160.0));
    assert!(approx(end.y1, 960.0));
}

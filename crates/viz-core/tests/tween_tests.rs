// Host-side tests for easing curves and the spin tween.

use glam::Vec3;
use viz_core::{Easing, SpinTween};

#[test]
fn easing_hits_both_endpoints() {
    for easing in [Easing::Linear, Easing::EaseInOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    assert_eq!(Easing::EaseInOutCubic.apply(-2.0), 0.0);
    assert_eq!(Easing::EaseInOutCubic.apply(3.0), 1.0);
}

#[test]
fn ease_in_out_cubic_is_symmetric_and_monotonic() {
    let e = Easing::EaseInOutCubic;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = e.apply(i as f32 / 100.0);
        assert!(v >= prev, "easing decreased at step {i}");
        prev = v;
    }
    // S-curve: slow start, fast middle.
    assert!(e.apply(0.1) < 0.1);
    assert!(e.apply(0.9) > 0.9);
}

#[test]
fn step_deltas_sum_to_the_full_offset() {
    let offset = Vec3::new(6.0, 3.0, 1.5);
    let mut tween = SpinTween::new(0, offset, 1.5, Easing::EaseInOutCubic);
    let mut total = Vec3::ZERO;
    // Uneven steps that do not divide the duration evenly.
    for _ in 0..1000 {
        total += tween.step(0.0021);
        if tween.finished() {
            break;
        }
    }
    assert!(tween.finished());
    assert!((total - offset).length() < 1e-4, "total {total}");
}

#[test]
fn final_step_snaps_to_completion() {
    let offset = Vec3::new(1.0, 0.0, 0.0);
    let mut tween = SpinTween::new(0, offset, 1.0, Easing::Linear);
    let a = tween.step(0.6);
    let b = tween.step(10.0); // way past the end
    assert!(((a + b).x - 1.0).abs() < 1e-6);
    assert!(tween.finished());
    // Further steps contribute nothing.
    assert_eq!(tween.step(1.0), Vec3::ZERO);
}

#[test]
fn zero_duration_completes_in_one_step() {
    let offset = Vec3::new(2.0, 0.0, 0.0);
    let mut tween = SpinTween::new(1, offset, 0.0, Easing::EaseInOutCubic);
    assert_eq!(tween.step(1.0 / 60.0), offset);
    assert!(tween.finished());
}

#[test]
fn overlapping_tweens_compose_additively() {
    let offset = Vec3::new(6.0, 3.0, 1.5);
    let mut a = SpinTween::new(2, offset, 1.5, Easing::EaseInOutCubic);
    let mut b = SpinTween::new(2, offset, 1.5, Easing::EaseInOutCubic);
    let mut rotation = Vec3::ZERO;
    rotation += b.step(0.4); // b started earlier; phases differ
    for _ in 0..200 {
        rotation += a.step(0.01) + b.step(0.01);
    }
    assert!(a.finished() && b.finished());
    // Both full offsets land on the shared rotation, independent of phase.
    assert!((rotation - offset * 2.0).length() < 1e-3);
}

#[test]
fn negative_dt_is_ignored() {
    let mut tween = SpinTween::new(0, Vec3::X, 1.0, Easing::Linear);
    let before = tween.step(0.25);
    let reversed = tween.step(-1.0);
    assert!((before.x - 0.25).abs() < 1e-6);
    assert_eq!(reversed, Vec3::ZERO);
}

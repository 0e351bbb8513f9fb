// Host-side tests for the scroll-to-section mapper.

use viz_core::{section_index, SectionTracker};

#[test]
fn section_index_is_monotonic_in_scroll_offset() {
    let mut prev = 0;
    for step in 0..200 {
        let scroll = step as f32 * 25.0;
        let idx = section_index(scroll, 800, 3);
        assert!(idx >= prev, "index decreased at scroll {scroll}");
        prev = idx;
    }
}

#[test]
fn section_index_clamps_past_last_section() {
    // Scrolling far past the last section must never index out of range.
    assert_eq!(section_index(10_000.0, 800, 3), 2);
    assert_eq!(section_index(f32::MAX, 800, 3), 2);
}

#[test]
fn section_index_guards_zero_viewport_height() {
    assert_eq!(section_index(1234.0, 0, 3), 0);
}

#[test]
fn section_index_ignores_negative_overscroll() {
    // Elastic overscroll reports negative offsets on some platforms.
    assert_eq!(section_index(-50.0, 800, 3), 0);
}

#[test]
fn section_index_scenario_800px_viewport() {
    let offsets = [0.0, 399.0, 799.0, 801.0, 1600.0];
    let expected = [0, 0, 1, 1, 2];
    for (scroll, want) in offsets.iter().zip(expected) {
        assert_eq!(section_index(*scroll, 800, 3), want, "at scroll {scroll}");
    }
}

#[test]
fn section_index_rounds_half_up_at_the_boundary() {
    // Exactly half a viewport belongs to the next section (Math.round).
    assert_eq!(section_index(400.0, 800, 3), 1);
    assert_eq!(section_index(399.9, 800, 3), 0);
}

#[test]
fn tracker_fires_exactly_once_per_crossing() {
    let mut tracker = SectionTracker::new(3);

    // Many scroll events inside section 0: no transitions.
    for scroll in [0.0, 50.0, 120.0, 399.0] {
        assert_eq!(tracker.observe(scroll, 800), None);
    }

    // Crossing into section 1 fires once, then goes quiet.
    assert_eq!(tracker.observe(800.0, 800), Some(1));
    assert_eq!(tracker.observe(810.0, 800), None);
    assert_eq!(tracker.observe(790.0, 800), None);

    // Scrolling back fires the reverse transition once.
    assert_eq!(tracker.observe(0.0, 800), Some(0));
    assert_eq!(tracker.observe(10.0, 800), None);
}

#[test]
fn tracker_reports_skipped_sections_as_one_transition() {
    // A violent scroll from top to bottom lands directly on the last index.
    let mut tracker = SectionTracker::new(3);
    assert_eq!(tracker.observe(1600.0, 800), Some(2));
    assert_eq!(tracker.observe(1600.0, 800), None);
}

//! Scroll offset to discrete section mapping.
//!
//! A "section" is one full-viewport scroll page, one per showcase mesh. The
//! index is the scroll/viewport ratio rounded half up, clamped to the mesh
//! range so overscrolling past the last section never indexes out of bounds.

/// Map a scroll offset (pixels) to a section index in `0..count`.
///
/// A zero viewport height maps everything to section 0 rather than dividing
/// by zero.
pub fn section_index(scroll_y: f32, viewport_height: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if viewport_height == 0 {
        return 0;
    }
    let ratio = scroll_y.max(0.0) / viewport_height as f32;
    (ratio.round() as usize).min(count - 1)
}

/// Tracks the current section and reports boundary crossings exactly once.
///
/// Scroll events arrive far more often than sections change; `observe` only
/// returns `Some` on the event where the rounded ratio lands on a new index.
#[derive(Clone, Copy, Debug)]
pub struct SectionTracker {
    current: usize,
    count: usize,
}

impl SectionTracker {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Feed a scroll offset; returns the new index if this event crossed a
    /// section boundary (in either direction), `None` otherwise.
    pub fn observe(&mut self, scroll_y: f32, viewport_height: u32) -> Option<usize> {
        let next = section_index(scroll_y, viewport_height, self.count);
        if next != self.current {
            self.current = next;
            Some(next)
        } else {
            None
        }
    }
}

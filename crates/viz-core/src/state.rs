//! Small value types shared between the scene logic and the web frontend.
//!
//! Nothing here touches platform APIs; the frontend feeds in pixel sizes,
//! pointer coordinates and clock readings and reads back matrices.

use glam::{Mat4, Vec3};

/// Viewport size in physical pixels, updated from resize events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A degenerate viewport (either axis zero) yields
    /// 1.0 so projection math never divides by zero.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Pointer position normalized to [0, 1] per axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Build from pixel coordinates; a zero-sized viewport maps to the center.
    pub fn from_pixels(px: f32, py: f32, viewport: ViewportSize) -> Self {
        if viewport.width == 0 || viewport.height == 0 {
            return Self { x: 0.5, y: 0.5 };
        }
        Self {
            x: (px / viewport.width as f32).clamp(0.0, 1.0),
            y: (py / viewport.height as f32).clamp(0.0, 1.0),
        }
    }
}

/// Per-frame clock. The frontend feeds in monotonic elapsed seconds; the
/// clock hands back the delta since the previous tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    pub elapsed: f32,
    prev_elapsed: f32,
}

impl FrameClock {
    /// Advance to `now_secs` and return the frame delta, clamped to >= 0 so
    /// a clock reset never runs the simulation backwards.
    pub fn tick(&mut self, now_secs: f32) -> f32 {
        self.prev_elapsed = self.elapsed;
        self.elapsed = now_secs;
        (self.elapsed - self.prev_elapsed).max(0.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

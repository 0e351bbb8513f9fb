//! Fire-and-forget spin tweens for section transitions.
//!
//! Each tween is an independent little task with its own elapsed time. It
//! hands back *incremental* eased deltas so its motion composes additively
//! with the continuous per-frame spin and with any other tween targeting the
//! same mesh; nothing is cancelled when tweens overlap.

use glam::Vec3;

/// Timing curve applied to a normalized time parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Smooth S-curve; accelerates in, decelerates out.
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1]. Maps 0 to 0 and 1 to 1.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseInOutCubic
    }
}

/// A time-bounded relative rotation applied to one section mesh.
#[derive(Clone, Debug)]
pub struct SpinTween {
    pub mesh_index: usize,
    offset: Vec3,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    eased_prev: f32,
}

impl SpinTween {
    pub fn new(mesh_index: usize, offset: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            mesh_index,
            offset,
            duration,
            easing,
            elapsed: 0.0,
            eased_prev: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the rotation delta for this frame.
    ///
    /// The sum of all deltas over the tween's life equals `offset` exactly:
    /// the final step snaps the eased progress to 1. A non-positive duration
    /// completes in a single step.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt.max(0.0);
        let eased = if self.duration <= 0.0 || self.elapsed >= self.duration {
            1.0
        } else {
            self.easing.apply(self.elapsed / self.duration)
        };
        let delta = eased - self.eased_prev;
        self.eased_prev = eased;
        self.offset * delta
    }

    pub fn finished(&self) -> bool {
        self.eased_prev >= 1.0
    }
}

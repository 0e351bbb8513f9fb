//! Application state and the per-frame update step.
//!
//! Everything the page mutates lives in one explicit [`SceneState`] passed by
//! reference into the event handlers and the frame loop; there are no hidden
//! globals. Event handlers write raw inputs (scroll offset, pointer, viewport)
//! and [`SceneState::advance`] derives the camera and mesh transforms from
//! them once per display frame.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::constants::{
    CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_MATERIAL_COLOR, MESH_SCALE,
    MESH_X_POSITIONS, OBJECT_DISTANCE, PARALLAX_SMOOTHING, ROTATION_RATE_X, ROTATION_RATE_Y,
    SECTION_COUNT, SPIN_DURATION_SEC, SPIN_OFFSET,
};
use crate::sections::SectionTracker;
use crate::state::{Camera, PointerState, ViewportSize};
use crate::tween::{Easing, SpinTween};

/// One showcase mesh, placed one section-height below the previous one.
#[derive(Clone, Copy, Debug)]
pub struct SectionMesh {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl SectionMesh {
    /// Model matrix from the Euler rotation, uniform scale and position.
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

/// Camera placement derived each frame: scroll drives the inner camera's Y,
/// pointer parallax drives the smoothed parent-group offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRig {
    pub camera_y: f32,
    pub group: Vec2,
}

pub struct SceneState {
    pub viewport: ViewportSize,
    pub scroll_y: f32,
    pub pointer: PointerState,
    pub rig: CameraRig,
    pub meshes: [SectionMesh; SECTION_COUNT],
    pub material_color: [f32; 3],
    sections: SectionTracker,
    spins: Vec<SpinTween>,
}

impl SceneState {
    pub fn new(viewport: ViewportSize) -> Self {
        let mut meshes = [SectionMesh {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: MESH_SCALE,
        }; SECTION_COUNT];
        for (i, mesh) in meshes.iter_mut().enumerate() {
            mesh.position = Vec3::new(MESH_X_POSITIONS[i], OBJECT_DISTANCE * i as f32, 0.0);
        }
        Self {
            viewport,
            scroll_y: 0.0,
            pointer: PointerState::default(),
            rig: CameraRig::default(),
            meshes,
            material_color: DEFAULT_MATERIAL_COLOR,
            sections: SectionTracker::new(SECTION_COUNT),
            spins: Vec::new(),
        }
    }

    pub fn current_section(&self) -> usize {
        self.sections.current()
    }

    pub fn active_spin_count(&self) -> usize {
        self.spins.len()
    }

    /// Resize reaction: store the new viewport. The renderer picks the size
    /// up on the next frame; the camera aspect comes from [`Self::camera`].
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = ViewportSize::new(width, height);
    }

    /// Pointer-move reaction: store the normalized position.
    pub fn set_pointer_pixels(&mut self, px: f32, py: f32) {
        self.pointer = PointerState::from_pixels(px, py, self.viewport);
    }

    /// Scroll reaction: store the offset and, when the rounded
    /// scroll-to-viewport ratio lands on a new section, launch exactly one
    /// spin tween on that section's mesh. Repeated events inside the same
    /// section launch nothing.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
        if let Some(section) = self.sections.observe(scroll_y, self.viewport.height) {
            log::debug!("section changed -> {section}");
            let mesh_index = section.min(self.meshes.len() - 1);
            self.spins.push(SpinTween::new(
                mesh_index,
                SPIN_OFFSET,
                SPIN_DURATION_SEC,
                Easing::EaseInOutCubic,
            ));
        }
    }

    /// The per-tick update: derive camera and mesh transforms from the latest
    /// raw inputs. `dt` is the frame delta in seconds, already clamped >= 0
    /// by [`crate::state::FrameClock`].
    pub fn advance(&mut self, dt: f32) {
        // Scroll -> camera Y: direct linear mapping, no smoothing.
        let height = self.viewport.height.max(1) as f32;
        self.rig.camera_y = self.scroll_y / height * OBJECT_DISTANCE;

        // Pointer -> parallax group: first-order low-pass toward the target,
        // scaled by dt so the settle time is frame-rate independent.
        let target = Vec2::new(self.pointer.x, -self.pointer.y);
        self.rig.group += (target - self.rig.group) * PARALLAX_SMOOTHING * dt;

        // Continuous spin, accumulated so tween deltas compose with it.
        for mesh in &mut self.meshes {
            mesh.rotation.x += dt * ROTATION_RATE_X;
            mesh.rotation.y += dt * ROTATION_RATE_Y;
        }

        // Active section tweens; retired once their full offset is applied.
        for spin in &mut self.spins {
            let delta = spin.step(dt);
            self.meshes[spin.mesh_index].rotation += delta;
        }
        self.spins.retain(|s| !s.finished());
    }

    /// Camera for the current rig state: the parallax group is the parent
    /// transform, the scroll offset moves the inner camera vertically.
    pub fn camera(&self) -> Camera {
        let eye = Vec3::new(
            self.rig.group.x,
            self.rig.camera_y + self.rig.group.y,
            CAMERA_Z,
        );
        Camera {
            eye,
            target: eye + Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: self.viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

//! CPU-side mesh generation for the section meshes and the point cloud.
//!
//! All geometry is generated once at startup; the renderer uploads it to
//! vertex/index buffers and never touches it again.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::{OBJECT_DISTANCE, POINT_SPREAD_X, POINT_SPREAD_Z, SECTION_COUNT};

/// Position + normal, tightly packed for direct buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// Ring torus around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.push(position, (position - center).normalize());
        }
    }
    let stride = tubular_segments + 1;
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            mesh.tri(a, b, a + 1);
            mesh.tri(b, b + 1, a + 1);
        }
    }
    mesh
}

/// Closed cone: apex up, circular base cap.
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;

    // Slanted side. One apex vertex per segment keeps the slant normals
    // from collapsing at the tip.
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        let normal = Vec3::new(height * a.cos(), radius, height * a.sin()).normalize();
        mesh.push(Vec3::new(radius * a.cos(), -half, radius * a.sin()), normal);
    }
    let apex_base = mesh.vertices.len() as u32;
    for i in 0..segments {
        let a = (i as f32 + 0.5) / segments as f32 * std::f32::consts::TAU;
        let normal = Vec3::new(height * a.cos(), radius, height * a.sin()).normalize();
        mesh.push(Vec3::new(0.0, half, 0.0), normal);
    }
    for i in 0..segments {
        mesh.tri(apex_base + i, i + 1, i);
    }

    // Base cap.
    let cap_center = mesh.vertices.len() as u32;
    mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
    let cap_ring = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        mesh.push(
            Vec3::new(radius * a.cos(), -half, radius * a.sin()),
            Vec3::NEG_Y,
        );
    }
    for i in 0..segments {
        mesh.tri(cap_center, cap_ring + i, cap_ring + i + 1);
    }
    mesh
}

fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu = q / p * u;
    Vec3::new(
        radius * (2.0 + qu.cos()) * 0.5 * u.cos(),
        radius * (2.0 + qu.cos()) * 0.5 * u.sin(),
        radius * qu.sin() * 0.5,
    )
}

/// (p, q) = (2, 3) trefoil-style torus knot, tube swept along the curve.
pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32) -> MeshData {
    let (p, q) = (2.0_f32, 3.0_f32);
    let mut mesh = MeshData::default();
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * std::f32::consts::TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);

        // Frenet-style frame from neighboring curve points.
        let tangent = p2 - p1;
        let mut bitangent = tangent.cross(p2 + p1);
        let normal = bitangent.cross(tangent).normalize();
        bitangent = bitangent.normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + cx * normal + cy * bitangent;
            mesh.push(position, (position - p1).normalize());
        }
    }
    let stride = radial_segments + 1;
    for i in 0..tubular_segments {
        for j in 0..radial_segments {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            mesh.tri(a, b, a + 1);
            mesh.tri(b, b + 1, a + 1);
        }
    }
    mesh
}

/// Background star positions, scattered across the full scroll range.
/// Deterministic for a given seed.
pub fn point_cloud(seed: u64, count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let y_top = -OBJECT_DISTANCE * 0.5;
    let y_span = OBJECT_DISTANCE * SECTION_COUNT as f32;
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * POINT_SPREAD_X,
                y_top + rng.gen::<f32>() * y_span,
                (rng.gen::<f32>() - 0.5) * POINT_SPREAD_Z,
            )
        })
        .collect()
}

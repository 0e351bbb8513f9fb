// Host-side tests for mesh generation and the point cloud.

use viz_core::{
    cone, point_cloud, torus, torus_knot, MeshData, OBJECT_DISTANCE, POINT_SPREAD_X,
    POINT_SPREAD_Z, SECTION_COUNT,
};

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert!(!mesh.indices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0, "indices must form triangles");
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of range ({n} vertices)");
    }
    for v in &mesh.vertices {
        let len = (v.normal[0] * v.normal[0] + v.normal[1] * v.normal[1]
            + v.normal[2] * v.normal[2])
            .sqrt();
        assert!((len - 1.0).abs() < 1e-3, "non-unit normal {:?}", v.normal);
        assert!(v.position.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn torus_has_expected_grid_size() {
    let mesh = torus(1.0, 0.4, 16, 60);
    assert_eq!(mesh.vertices.len(), 17 * 61);
    assert_eq!(mesh.indices.len(), 16 * 60 * 6);
    assert_well_formed(&mesh);
}

#[test]
fn torus_vertices_lie_on_the_tube() {
    let mesh = torus(1.0, 0.4, 16, 60);
    for v in &mesh.vertices {
        // Distance from the ring circle equals the tube radius.
        let ring = (v.position[0] * v.position[0] + v.position[1] * v.position[1]).sqrt();
        let d = ((ring - 1.0).powi(2) + v.position[2] * v.position[2]).sqrt();
        assert!((d - 0.4).abs() < 1e-4);
    }
}

#[test]
fn cone_is_well_formed_and_bounded() {
    let mesh = cone(1.0, 2.0, 32);
    assert_well_formed(&mesh);
    for v in &mesh.vertices {
        assert!(v.position[1].abs() <= 1.0 + 1e-6, "outside half-height");
        let r = (v.position[0] * v.position[0] + v.position[2] * v.position[2]).sqrt();
        assert!(r <= 1.0 + 1e-5, "outside base radius");
    }
}

#[test]
fn torus_knot_has_expected_grid_size() {
    let mesh = torus_knot(0.8, 0.35, 100, 16);
    assert_eq!(mesh.vertices.len(), 101 * 17);
    assert_eq!(mesh.indices.len(), 100 * 16 * 6);
    assert_well_formed(&mesh);
}

#[test]
fn point_cloud_is_deterministic_for_a_seed() {
    let a = point_cloud(7, 64);
    let b = point_cloud(7, 64);
    assert_eq!(a.len(), 64);
    assert_eq!(a, b);
    assert_ne!(point_cloud(8, 64), a);
}

#[test]
fn point_cloud_spans_all_sections() {
    let points = point_cloud(42, 500);
    let y_top = -OBJECT_DISTANCE * 0.5;
    let y_bottom = y_top + OBJECT_DISTANCE * SECTION_COUNT as f32;
    for p in &points {
        assert!(p.x.abs() <= POINT_SPREAD_X * 0.5 + 1e-5);
        assert!(p.z.abs() <= POINT_SPREAD_Z * 0.5 + 1e-5);
        assert!(p.y <= y_top + 1e-5 && p.y >= y_bottom - 1e-5);
    }
    // With 500 samples, at least one point near each section's depth.
    for i in 0..SECTION_COUNT {
        let section_y = OBJECT_DISTANCE * i as f32;
        assert!(
            points.iter().any(|p| (p.y - section_y).abs() < 1.0),
            "no points near section {i}"
        );
    }
}

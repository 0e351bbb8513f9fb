// Host-side tests for tuning constants and their relationships.

use viz_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SECTION_COUNT > 0);
    assert_eq!(MESH_X_POSITIONS.len(), SECTION_COUNT);

    // Sections stack downward.
    assert!(OBJECT_DISTANCE < 0.0);

    assert!(PARALLAX_SMOOTHING > 0.0);
    assert!(ROTATION_RATE_X > 0.0);
    assert!(ROTATION_RATE_Y > 0.0);
    assert!(SPIN_DURATION_SEC > 0.0);

    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);

    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(POINT_COUNT > 0);
    assert!(POINT_SIZE > 0.0);

    // The key light must normalize cleanly; the shader bakes it in.
    let light = LIGHT_DIRECTION.normalize();
    assert!(light.is_finite());
    assert!((light.length() - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Yaw spins faster than pitch, so silhouettes keep changing.
    assert!(ROTATION_RATE_Y > ROTATION_RATE_X);

    // The one-shot spin dominates a single frame of continuous rotation.
    assert!(SPIN_OFFSET.x > ROTATION_RATE_X);
    assert!(SPIN_OFFSET.y > ROTATION_RATE_Y);

    // The parallax filter settles well within one section's scroll dwell at
    // 60 fps: rate * dt stays below the stability bound of 1.
    assert!(PARALLAX_SMOOTHING / 60.0 < 1.0);

    // Camera sits in front of the first mesh.
    assert!(CAMERA_Z > 0.0);

    // Default material color is a valid normalized RGB.
    assert!(DEFAULT_MATERIAL_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

use glam::Vec3;

// Shared layout and motion tuning constants used by the web frontend.

// Scene layout
pub const SECTION_COUNT: usize = 3; // one mesh per scroll section
pub const OBJECT_DISTANCE: f32 = -4.0; // vertical world-space spacing between sections
pub const MESH_SCALE: f32 = 0.5; // uniform scale applied to every section mesh
pub const MESH_X_POSITIONS: [f32; SECTION_COUNT] = [2.0, -2.0, 2.0]; // alternating sides

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pointer parallax: first-order low-pass rate (1/s), scaled by frame dt
pub const PARALLAX_SMOOTHING: f32 = 5.0;

// Continuous mesh spin (rad/s)
pub const ROTATION_RATE_X: f32 = 0.1;
pub const ROTATION_RATE_Y: f32 = 0.52;

// One-shot spin applied when scrolling into a new section
pub const SPIN_OFFSET: Vec3 = Vec3::new(6.0, 3.0, 1.5); // rad
pub const SPIN_DURATION_SEC: f32 = 1.5;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0; // devicePixelRatio cap to bound fill rate
pub const DEFAULT_MATERIAL_COLOR: [f32; 3] = [1.0, 0.929, 0.929]; // #ffeded

// Directional key light
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(1.0, 1.0, 0.0);

// Background point cloud
pub const POINT_COUNT: usize = 200;
pub const POINT_CLOUD_SEED: u64 = 42;
pub const POINT_SPREAD_X: f32 = 10.0; // total horizontal extent, centered on 0
pub const POINT_SPREAD_Z: f32 = 10.0;
pub const POINT_SIZE: f32 = 0.04;

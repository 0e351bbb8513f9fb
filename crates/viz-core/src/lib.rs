pub mod color;
pub mod constants;
pub mod geometry;
pub mod scene;
pub mod sections;
pub mod state;
pub mod tween;

pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use scene::*;
pub use sections::*;
pub use state::*;
pub use tween::*;

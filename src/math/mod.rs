//! Vector math.

pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vecn;

pub use scalar::{Promote, Scalar};
pub use vec2::{Vec2, Vec2f, Vec2i};
pub use vec3::{Vec3, Vec3f, Vec3i};
pub use vecn::VecN;

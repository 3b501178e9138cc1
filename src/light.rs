//! Lighting types for the renderer.

use crate::primitives::Point3d;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel. The direction is used as given:
/// its length scales every intensity, so pass a unit vector for intensities
/// in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Point3d,
}

impl DirectionalLight {
    pub const fn new(direction: Point3d) -> Self {
        DirectionalLight { direction }
    }

    /// Flat shading intensity of a face with unit normal `normal`.
    ///
    /// Positive when the face is turned towards the light; faces with an
    /// intensity of zero or less are not lit at all.
    pub fn intensity(&self, normal: &Point3d) -> f64 {
        normal.dot(&self.direction)
    }

    /// Grey channel value for an intensity, clamped to `[0, 255]`.
    pub fn grey_level(intensity: f64) -> u8 {
        (intensity * 255.0).clamp(0.0, 255.0) as u8
    }
}

impl Default for DirectionalLight {
    /// Looking down the negative z axis.
    fn default() -> Self {
        Self::new(Point3d::new(0.0, 0.0, -1.0))
    }
}

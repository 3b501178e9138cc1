//! Barycentric triangle rasterization.
//!
//! Every pixel of the triangle's bounding box is tested against the three
//! barycentric weights of the triangle. With vertices `v0, v1, v2` and
//! `d = p - v2`:
//!
//! ```text
//! detT    = (v0.x - v2.x)(v1.y - v2.y) - (v0.y - v2.y)(v1.x - v2.x)
//! lambda0 = (v1.y - v2.y) d.x + (v2.x - v1.x) d.y
//! lambda1 = (v2.y - v0.y) d.x + (v0.x - v2.x) d.y
//! lambda2 = detT - lambda0 - lambda1
//! ```
//!
//! Each weight is scaled by `detT`, so the point is inside (or on an edge)
//! exactly when all three share the sign of `detT` or are zero. This holds for
//! either winding. All values are `i128` integers, so the test is exact for any
//! `i32` vertex coordinates.
//!
//! The loop structure mirrors GPU rasterization: each pixel is independent,
//! at the cost of visiting empty corners of the bounding box for thin or
//! diagonal triangles.

use super::{Coverage, Rasterizer};
use crate::primitives::ScreenTriangle;
use crate::render::framebuffer::PixelTarget;

/// Triangle rasterizer using barycentric weights over the bounding box.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    /// Creates a new barycentric rasterizer instance.
    pub fn new() -> Self {
        Self
    }
}

/// Precomputed weight coefficients for one triangle.
struct Weights {
    det: i128,
    origin: (i128, i128),
    k0: (i128, i128),
    k1: (i128, i128),
}

impl Weights {
    fn new(triangle: &ScreenTriangle) -> Self {
        let [v0, v1, v2] = triangle.map(|v| (i128::from(v.x()), i128::from(v.y())));
        Self {
            det: (v0.0 - v2.0) * (v1.1 - v2.1) - (v0.1 - v2.1) * (v1.0 - v2.0),
            origin: v2,
            k0: (v1.1 - v2.1, v2.0 - v1.0),
            k1: (v2.1 - v0.1, v0.0 - v2.0),
        }
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        let dx = i128::from(x) - self.origin.0;
        let dy = i128::from(y) - self.origin.1;
        let l0 = self.k0.0 * dx + self.k0.1 * dy;
        let l1 = self.k1.0 * dx + self.k1.1 * dy;
        let l2 = self.det - l0 - l1;
        if self.det > 0 {
            l0 >= 0 && l1 >= 0 && l2 >= 0
        } else {
            l0 <= 0 && l1 <= 0 && l2 <= 0
        }
    }
}

impl Rasterizer for BarycentricRasterizer {
    fn fill_triangle<T: PixelTarget + ?Sized>(&self, triangle: &ScreenTriangle, target: &mut T, color: u32) {
        let Some(area) = Coverage::of(triangle, target) else {
            return;
        };
        let weights = Weights::new(triangle);

        for y in area.min_y..area.max_y {
            for x in area.min_x..area.max_x {
                if weights.contains(x, y) {
                    target.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Pixel;

    #[test]
    fn vertices_and_interior_are_inside() {
        let t = [Pixel::new(1, 2), Pixel::new(9, 3), Pixel::new(4, 8)];
        let w = Weights::new(&t);
        assert!(w.contains(1, 2));
        assert!(w.contains(9, 3));
        assert!(w.contains(4, 8));
        assert!(w.contains(4, 4));
        assert!(!w.contains(0, 0));
        assert!(!w.contains(9, 8));
    }

    #[test]
    fn both_windings_have_the_same_interior() {
        let cw = [Pixel::new(0, 0), Pixel::new(0, 6), Pixel::new(6, 0)];
        let ccw = [cw[0], cw[2], cw[1]];
        let (a, b) = (Weights::new(&cw), Weights::new(&ccw));
        assert_eq!(a.det, -b.det);
        for y in -1..8 {
            for x in -1..8 {
                assert_eq!(a.contains(x, y), b.contains(x, y), "({x}, {y})");
            }
        }
    }
}

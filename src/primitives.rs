//! Named geometric shapes built from the vector types.
//!
//! Shapes are ordered arrays of points: the order defines edges and winding
//! and is never treated as a set.

use crate::math::{Vec2, Vec3};

pub type Point2d = Vec2<f32>;
pub type Point3d = Vec3<f32>;

/// An integer pixel position in screen space.
pub type Pixel = Vec2<i32>;

pub type Line<P> = [P; 2];
pub type Triangle<P> = [P; 3];
pub type Rect<P> = [P; 4];

pub type Line2d = Line<Point2d>;
pub type Line3d = Line<Point3d>;
pub type Triangle2d = Triangle<Point2d>;
pub type Triangle3d = Triangle<Point3d>;
pub type Rect2d = Rect<Point2d>;
pub type Rect3d = Rect<Point3d>;

/// A triangle ready for rasterization.
pub type ScreenTriangle = Triangle<Pixel>;

/// Twice the signed area of a screen triangle.
///
/// Positive for counter-clockwise vertices in a y-up frame, zero when the
/// points are colinear or coincident. Exact for any `i32` coordinates.
pub fn doubled_area(triangle: &ScreenTriangle) -> i128 {
    let [a, b, c] = triangle.map(|p| (i128::from(p.x()), i128::from(p.y())));
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (acx, acy) = (c.0 - a.0, c.1 - a.1);
    abx * acy - aby * acx
}

/// Minimum and maximum corners of the axis-aligned bounding box.
pub fn bounding_box(triangle: &ScreenTriangle) -> (Pixel, Pixel) {
    let xs = triangle.map(|p| p.x());
    let ys = triangle.map(|p| p.y());
    let min = Pixel::new(xs[0].min(xs[1]).min(xs[2]), ys[0].min(ys[1]).min(ys[2]));
    let max = Pixel::new(xs[0].max(xs[1]).max(xs[2]), ys[0].max(ys[1]).max(ys[2]));
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_sign_and_degeneracy() {
        let ccw = [Pixel::new(0, 0), Pixel::new(4, 0), Pixel::new(0, 4)];
        assert_eq!(doubled_area(&ccw), 16);
        let cw = [ccw[0], ccw[2], ccw[1]];
        assert_eq!(doubled_area(&cw), -16);
        let flat = [Pixel::new(0, 0), Pixel::new(2, 2), Pixel::new(5, 5)];
        assert_eq!(doubled_area(&flat), 0);
    }

    #[test]
    fn area_of_the_widest_triangle() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        let span = i128::from(hi) - i128::from(lo);
        let tri = [Pixel::new(lo, lo), Pixel::new(hi, lo), Pixel::new(lo, hi)];
        assert_eq!(doubled_area(&tri), span * span);
    }

    #[test]
    fn bounding_box_spans_all_corners() {
        let tri = [Pixel::new(3, -1), Pixel::new(-2, 5), Pixel::new(7, 2)];
        assert_eq!(bounding_box(&tri), (Pixel::new(-2, -1), Pixel::new(7, 5)));
    }
}

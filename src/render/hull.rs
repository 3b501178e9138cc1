//! Convex-polygon point tests.
//!
//! Orientation here is mathematical: "clockwise" means clockwise with `y`
//! pointing up, regardless of how the target lays out its rows. All arithmetic
//! is widened to `i128` so no pair of `i32` coordinates can overflow the
//! products.

use crate::primitives::{Pixel, ScreenTriangle};

/// Angular order around `center`, starting at 12 o'clock and going clockwise.
///
/// Returns `true` when `a` comes strictly before `b`. Points on the same ray
/// from the center are ordered farthest first.
pub fn clockwise_less(a: Pixel, b: Pixel, center: Pixel) -> bool {
    clockwise_less_wide(widen(a), widen(b), widen(center))
}

/// Whether `p` lies on the clockwise side of the directed edge `from → to`,
/// or on the edge's supporting line.
pub fn clockwise_side(p: Pixel, from: Pixel, to: Pixel) -> bool {
    let [px, py] = widen(p);
    let [ax, ay] = widen(from);
    let [bx, by] = widen(to);
    // edge normal pointing to the clockwise side
    let (nx, ny) = (by - ay, ax - bx);
    (px - ax) * nx + (py - ay) * ny >= 0
}

/// Whether `p` lies inside or on the boundary of a clockwise convex polygon.
///
/// Every consecutive edge is checked, including the closing edge from the last
/// vertex back to the first. A polygon with fewer than 3 vertices contains
/// nothing.
pub fn in_convex_hull(p: Pixel, hull: &[Pixel]) -> bool {
    let (Some(&first), Some(&last)) = (hull.first(), hull.last()) else {
        return false;
    };
    if hull.len() < 3 {
        return false;
    }
    hull.windows(2).all(|edge| clockwise_side(p, edge[0], edge[1])) && clockwise_side(p, last, first)
}

/// Reorder a triangle's vertices clockwise around its centroid.
///
/// The centroid is compared in coordinates scaled by 3, so the ordering is
/// exact. Zero-area triangles are left in an unspecified order.
pub fn sort_clockwise(triangle: &mut ScreenTriangle) {
    let [a, b, c] = triangle.map(widen);
    let center = [a[0] + b[0] + c[0], a[1] + b[1] + c[1]];
    let scaled = |p: Pixel| {
        let [x, y] = widen(p);
        [3 * x, 3 * y]
    };
    let less = |l: Pixel, r: Pixel| clockwise_less_wide(scaled(l), scaled(r), center);

    if less(triangle[1], triangle[0]) {
        triangle.swap(0, 1);
    }
    if less(triangle[2], triangle[1]) {
        triangle.swap(1, 2);
    }
    if less(triangle[1], triangle[0]) {
        triangle.swap(0, 1);
    }
}

#[inline]
fn widen(p: Pixel) -> [i128; 2] {
    [i128::from(p.x()), i128::from(p.y())]
}

fn clockwise_less_wide(a: [i128; 2], b: [i128; 2], center: [i128; 2]) -> bool {
    let (ax, ay) = (a[0] - center[0], a[1] - center[1]);
    let (bx, by) = (b[0] - center[0], b[1] - center[1]);

    if ax >= 0 && bx < 0 {
        return true;
    }
    if ax < 0 && bx >= 0 {
        return false;
    }
    if ax == 0 && bx == 0 {
        if ay >= 0 || by >= 0 {
            return ay > by;
        }
        return by > ay;
    }

    let det = ax * by - bx * ay;
    if det != 0 {
        return det < 0;
    }
    ax * ax + ay * ay > bx * bx + by * by
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Pixel; 4] {
        // clockwise with y up
        [
            Pixel::new(0, 0),
            Pixel::new(0, 4),
            Pixel::new(4, 4),
            Pixel::new(4, 0),
        ]
    }

    #[test]
    fn order_starts_at_twelve_oclock() {
        let center = Pixel::new(0, 0);
        let top = Pixel::new(0, 5);
        let right = Pixel::new(5, 0);
        let bottom = Pixel::new(0, -5);
        let left = Pixel::new(-5, 0);
        assert!(clockwise_less(top, right, center));
        assert!(clockwise_less(right, bottom, center));
        assert!(clockwise_less(bottom, left, center));
        assert!(!clockwise_less(left, top, center));
        assert!(!clockwise_less(right, top, center));
    }

    #[test]
    fn same_ray_puts_farther_first() {
        let center = Pixel::new(0, 0);
        assert!(clockwise_less(Pixel::new(4, 4), Pixel::new(2, 2), center));
        assert!(!clockwise_less(Pixel::new(2, 2), Pixel::new(4, 4), center));
    }

    #[test]
    fn side_of_edge() {
        let (from, to) = (Pixel::new(0, 0), Pixel::new(0, 4));
        assert!(clockwise_side(Pixel::new(2, 1), from, to));
        assert!(clockwise_side(Pixel::new(0, 9), from, to));
        assert!(!clockwise_side(Pixel::new(-1, 1), from, to));
    }

    #[test]
    fn hull_contains_interior_and_boundary() {
        let hull = square();
        assert!(in_convex_hull(Pixel::new(2, 2), &hull));
        assert!(in_convex_hull(Pixel::new(0, 0), &hull));
        assert!(in_convex_hull(Pixel::new(4, 2), &hull));
        assert!(!in_convex_hull(Pixel::new(5, 2), &hull));
        assert!(!in_convex_hull(Pixel::new(2, -1), &hull));
    }

    #[test]
    fn counter_clockwise_hull_contains_nothing_inside() {
        let mut hull = square();
        hull.reverse();
        assert!(!in_convex_hull(Pixel::new(2, 2), &hull));
    }

    #[test]
    fn short_hulls_are_empty() {
        let p = Pixel::new(1, 1);
        assert!(!in_convex_hull(p, &[]));
        assert!(!in_convex_hull(p, &[p]));
        assert!(!in_convex_hull(p, &[p, Pixel::new(3, 3)]));
    }

    #[test]
    fn sorting_yields_clockwise_for_every_permutation() {
        let tri = [Pixel::new(0, 0), Pixel::new(4, 0), Pixel::new(0, 4)];
        let perms = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for perm in perms {
            let mut t = perm.map(|i| tri[i]);
            sort_clockwise(&mut t);
            assert!(crate::primitives::doubled_area(&t) < 0, "{perm:?} gave {t:?}");
            assert!(in_convex_hull(Pixel::new(1, 1), &t));
        }
    }

    #[test]
    fn extreme_coordinates_keep_exact_order() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        let mut t = [Pixel::new(lo, lo), Pixel::new(hi, lo), Pixel::new(lo, hi)];
        sort_clockwise(&mut t);
        assert!(crate::primitives::doubled_area(&t) < 0);
        // the hypotenuse is x + y = -1
        assert!(in_convex_hull(Pixel::new(-1, 0), &t));
        assert!(!in_convex_hull(Pixel::new(0, 0), &t));
    }
}

//! Scanline triangle rasterization.
//!
//! The triangle is processed one row at a time. After sorting the vertices by
//! `y`, the rows split into two half-triangles that share the long edge
//! `v0 → v2`:
//!
//! ```text
//!             v2
//!             /|
//!            / |      top pass:    rows [v1.y, v2.y), edges v1→v2 and v0→v2
//!        v1 /  |
//!           \  |      bottom pass: rows [v0.y, v1.y), edges v0→v1 and v0→v2
//!            \ |
//!             \|
//!             v0
//! ```
//!
//! For each row the two edge crossings bound the covered span. The crossing
//! `x = a.x + (b.x - a.x)(y - a.y) / (b.y - a.y)` is rational, so the span is
//! computed with exact floor and ceiling division instead of floats: the left
//! end is the ceiling of the smaller crossing, the right end the floor of the
//! larger one. That keeps boundary pixels identical to the per-pixel tests of
//! the other rasterizers.
//!
//! Only covered pixels are visited and memory is written row by row, which
//! makes this the cheapest strategy for large or thin triangles.

use super::{Coverage, Rasterizer};
use crate::primitives::{Pixel, ScreenTriangle};
use crate::render::framebuffer::PixelTarget;
use crate::render::hull::sort_clockwise;

/// Scanline-based triangle rasterizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by `y`, ascending. Equal rows keep their order.
    fn sort_vertices(v: &mut ScreenTriangle) {
        if v[1].y() < v[0].y() {
            v.swap(0, 1);
        }
        if v[2].y() < v[1].y() {
            v.swap(1, 2);
        }
        if v[1].y() < v[0].y() {
            v.swap(0, 1);
        }
    }

    /// Fill rows `rows` between the edges `a → b` and `c → d`.
    fn fill_rows<T: PixelTarget + ?Sized>(
        rows: std::ops::Range<i32>,
        (a, b): (Pixel, Pixel),
        (c, d): (Pixel, Pixel),
        area: &Coverage,
        target: &mut T,
        color: u32,
    ) {
        let first = rows.start.max(area.min_y);
        let last = rows.end.min(area.max_y);
        let (e1, e2) = (Edge::new(a, b), Edge::new(c, d));
        for y in first..last {
            let (lo1, hi1) = e1.crossing(y);
            let (lo2, hi2) = e2.crossing(y);
            let left = lo1.min(lo2).max(i64::from(area.min_x));
            let right = (hi1.max(hi2) + 1).min(i64::from(area.max_x));
            for x in left..right {
                // left and right lie within the clipped i32 range
                target.set_pixel(x as i32, y, color);
            }
        }
    }
}

/// A triangle edge oriented upward, `dy >= 0`.
struct Edge {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
}

impl Edge {
    fn new(a: Pixel, b: Pixel) -> Self {
        let (a, b) = if a.y() <= b.y() { (a, b) } else { (b, a) };
        Self {
            x0: i64::from(a.x()),
            y0: i64::from(a.y()),
            dx: i64::from(b.x()) - i64::from(a.x()),
            dy: i64::from(b.y()) - i64::from(a.y()),
        }
    }

    /// `(ceil, floor)` of the edge's x at row `y`.
    #[inline]
    fn crossing(&self, y: i32) -> (i64, i64) {
        if self.dy == 0 {
            return (self.x0, self.x0);
        }
        let num = i128::from(self.dx) * (i128::from(y) - i128::from(self.y0));
        let dy = i128::from(self.dy);
        // both quotients lie between 0 and dx
        let floor = self.x0 + num.div_euclid(dy) as i64;
        let ceil = self.x0 - (-num).div_euclid(dy) as i64;
        (ceil, floor)
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Fills a triangle using the scanline algorithm.
    ///
    /// # Algorithm Steps
    ///
    /// 1. **Order vertices** clockwise around the centroid, then by `y`, so the
    ///    split between the passes does not depend on the input order
    /// 2. **Bottom pass** over rows `[v0.y, v1.y)`
    /// 3. **Top pass** over rows `[v1.y, v2.y)`
    ///
    /// A flat-bottom or flat-top triangle has an empty pass.
    fn fill_triangle<T: PixelTarget + ?Sized>(&self, triangle: &ScreenTriangle, target: &mut T, color: u32) {
        let Some(area) = Coverage::of(triangle, target) else {
            return;
        };
        let mut v = *triangle;
        sort_clockwise(&mut v);
        Self::sort_vertices(&mut v);
        let [v0, v1, v2] = v;

        Self::fill_rows(v0.y()..v1.y(), (v0, v1), (v0, v2), &area, target, color);
        Self::fill_rows(v1.y()..v2.y(), (v1, v2), (v0, v2), &area, target, color);
    }
}

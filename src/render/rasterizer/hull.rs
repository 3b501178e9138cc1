//! Convex hull triangle rasterization.
//!
//! The vertices are put in clockwise order around their centroid, after which
//! a pixel is covered when it lies on the clockwise side of all three edges.

use super::{Coverage, Rasterizer};
use crate::primitives::{Pixel, ScreenTriangle};
use crate::render::framebuffer::PixelTarget;
use crate::render::hull::{in_convex_hull, sort_clockwise};

/// Triangle rasterizer using the convex hull side test.
#[derive(Debug, Default, Clone, Copy)]
pub struct HullRasterizer;

impl HullRasterizer {
    /// Creates a new hull rasterizer instance.
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for HullRasterizer {
    fn fill_triangle<T: PixelTarget + ?Sized>(&self, triangle: &ScreenTriangle, target: &mut T, color: u32) {
        let Some(area) = Coverage::of(triangle, target) else {
            return;
        };
        let mut hull = *triangle;
        sort_clockwise(&mut hull);

        for y in area.min_y..area.max_y {
            for x in area.min_x..area.max_x {
                if in_convex_hull(Pixel::new(x, y), &hull) {
                    target.set_pixel(x, y, color);
                }
            }
        }
    }
}

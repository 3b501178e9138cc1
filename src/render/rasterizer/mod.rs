//! Triangle fill algorithms.
//!
//! Several interchangeable strategies fill a screen-space triangle with a
//! single colour. They can be swapped at runtime for comparison and
//! benchmarking, and they all follow the same coverage rule, so any of them
//! produces the same pixels:
//!
//! - a pixel `(x, y)` is filled when it lies inside or on the boundary of the
//!   triangle and `min_x <= x < max_x`, `min_y <= y < max_y`, the half-open
//!   bounding box of the vertices;
//! - a triangle with zero area fills nothing.
//!
//! Available algorithms:
//! - [`BarycentricRasterizer`]: bounding box iteration with a barycentric sign test
//! - [`ScanlineRasterizer`]: row spans between the triangle's edges
//! - [`HullRasterizer`]: bounding box iteration with a convex hull test

mod barycentric;
mod hull;
mod scanline;

pub use barycentric::BarycentricRasterizer;
pub use hull::HullRasterizer;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::PixelTarget;
use crate::primitives::{bounding_box, doubled_area, ScreenTriangle};

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel target. Vertex
/// order and winding do not affect the result.
pub trait Rasterizer {
    /// Fill `triangle` with `color`.
    fn fill_triangle<T: PixelTarget + ?Sized>(&self, triangle: &ScreenTriangle, target: &mut T, color: u32);
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RasterizerType {
    /// Tests every pixel of the bounding box with barycentric weights.
    #[default]
    Barycentric,
    /// Fills horizontal spans between the left and right edges, row by row.
    /// Only touches covered pixels.
    Scanline,
    /// Tests every pixel of the bounding box against the clockwise-ordered
    /// triangle edges.
    Hull,
}

impl RasterizerType {
    pub const ALL: [RasterizerType; 3] = [
        RasterizerType::Barycentric,
        RasterizerType::Scanline,
        RasterizerType::Hull,
    ];

    /// The next algorithm, wrapping around after the last.
    pub fn next(self) -> Self {
        match self {
            RasterizerType::Barycentric => RasterizerType::Scanline,
            RasterizerType::Scanline => RasterizerType::Hull,
            RasterizerType::Hull => RasterizerType::Barycentric,
        }
    }
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Barycentric => write!(f, "Barycentric"),
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::Hull => write!(f, "Hull"),
        }
    }
}

/// Holds every rasterizer implementation and forwards to the active one.
#[derive(Debug, Default)]
pub struct RasterizerDispatcher {
    barycentric: BarycentricRasterizer,
    scanline: ScanlineRasterizer,
    hull: HullRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            active: rasterizer_type,
            ..Self::default()
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle<T: PixelTarget + ?Sized>(&self, triangle: &ScreenTriangle, target: &mut T, color: u32) {
        match self.active {
            RasterizerType::Barycentric => self.barycentric.fill_triangle(triangle, target, color),
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, target, color),
            RasterizerType::Hull => self.hull.fill_triangle(triangle, target, color),
        }
    }
}

/// Half-open pixel range a triangle may cover, already clipped to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coverage {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Coverage {
    /// `None` when the triangle has zero area or misses the target entirely.
    pub(crate) fn of<T: PixelTarget + ?Sized>(triangle: &ScreenTriangle, target: &T) -> Option<Self> {
        if doubled_area(triangle) == 0 {
            return None;
        }
        let (min, max) = bounding_box(triangle);
        let width = i32::try_from(target.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(target.height()).unwrap_or(i32::MAX);
        let coverage = Self {
            min_x: min.x().max(0),
            min_y: min.y().max(0),
            max_x: max.x().min(width),
            max_y: max.y().min(height),
        };
        (coverage.min_x < coverage.max_x && coverage.min_y < coverage.max_y).then_some(coverage)
    }
}

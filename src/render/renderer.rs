//! Mesh rendering pipelines.
//!
//! Provides the [`Renderer`] struct, which draws whole models into a
//! [`PixelTarget`] either as a wireframe or as flat-shaded triangles, plus the
//! [`mesh`] and [`surf`] shortcuts that render with default options.
//!
//! There is no camera: model coordinates in `[-1, 1]` map straight onto the
//! target through a [`Viewport`], and `z` only matters for lighting.

use std::fmt;

use log::{debug, trace};

use super::framebuffer::PixelTarget;
use super::line::line_between;
use super::rasterizer::{Rasterizer, RasterizerDispatcher, RasterizerType};
use crate::colors::{grey, PixelFormat};
use crate::light::DirectionalLight;
use crate::model::Model;
use crate::primitives::{doubled_area, Pixel, Point3d, ScreenTriangle, Triangle3d};

/// Which way model-space `+y` points on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    /// `+y` is drawn upward. Rows are flipped because targets store the top
    /// row first.
    #[default]
    Up,
    /// `+y` is drawn downward, matching the target's row order.
    Down,
}

/// Maps model coordinates in `[-1, 1]` onto a `width × height` pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub y_axis: YAxis,
}

impl Viewport {
    pub fn new(width: u32, height: u32, y_axis: YAxis) -> Self {
        Self { width, height, y_axis }
    }

    /// A viewport covering the whole target.
    pub fn of<T: PixelTarget + ?Sized>(target: &T, y_axis: YAxis) -> Self {
        Self::new(target.width(), target.height(), y_axis)
    }

    /// `x = (v.x + 1) * width / 2`, `y = (v.y + 1) * height / 2`, truncated.
    ///
    /// With [`YAxis::Up`] the row is then mirrored to `height - 1 - y`.
    pub fn project(&self, v: &Point3d) -> Pixel {
        let x = ((f64::from(v.x()) + 1.0) * f64::from(self.width) / 2.0) as i32;
        let y = ((f64::from(v.y()) + 1.0) * f64::from(self.height) / 2.0) as i32;
        match self.y_axis {
            YAxis::Up => {
                let flipped = i64::from(self.height) - 1 - i64::from(y);
                let flipped = flipped.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
                Pixel::new(x, flipped)
            }
            YAxis::Down => Pixel::new(x, y),
        }
    }

    pub fn project_triangle(&self, triangle: &Triangle3d) -> ScreenTriangle {
        triangle.map(|v| self.project(&v))
    }
}

/// Settings shared by every draw call of a [`Renderer`].
///
/// Setters return `&mut Self` for chaining:
///
/// ```
/// use flatline::render::{RasterizerType, RenderOptions, YAxis};
///
/// let mut options = RenderOptions::default();
/// options.set_rasterizer(RasterizerType::Scanline).set_y_axis(YAxis::Down);
/// assert_eq!(options.rasterizer(), RasterizerType::Scanline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    rasterizer: RasterizerType,
    y_axis: YAxis,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer
    }

    pub fn set_rasterizer(&mut self, rasterizer: RasterizerType) -> &mut Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    pub fn set_y_axis(&mut self, y_axis: YAxis) -> &mut Self {
        self.y_axis = y_axis;
        self
    }
}

/// What happened to the faces of one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces in the model.
    pub faces: usize,
    /// Faces that were rasterized.
    pub drawn: usize,
    /// Faces turned away from the light.
    pub culled: usize,
    /// Faces with no area, in 3D or on screen.
    pub degenerate: usize,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} faces: {} drawn, {} culled, {} degenerate",
            self.faces, self.drawn, self.culled, self.degenerate
        )
    }
}

/// Draws models with a configurable rasterizer.
#[derive(Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
    rasterizer: RasterizerDispatcher,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            rasterizer: RasterizerDispatcher::new(options.rasterizer()),
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
        self.rasterizer.set_type(options.rasterizer());
    }

    pub fn rasterizer_type(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn set_rasterizer(&mut self, rasterizer: RasterizerType) {
        self.options.set_rasterizer(rasterizer);
        self.rasterizer.set_type(rasterizer);
    }

    /// Draw every face edge `j → (j + 1) mod 3` as a line.
    pub fn draw_wireframe<T: PixelTarget + ?Sized>(&self, model: &Model, target: &mut T, color: u32) -> RenderStats {
        let viewport = Viewport::of(target, self.options.y_axis());
        let mut stats = RenderStats {
            faces: model.face_count(),
            ..RenderStats::default()
        };

        for triangle in model.triangles() {
            let screen = viewport.project_triangle(&triangle);
            for j in 0..3 {
                line_between(screen[j], screen[(j + 1) % 3], target, color);
            }
            stats.drawn += 1;
        }

        debug!("wireframe: {stats}");
        stats
    }

    /// Fill every face turned towards `light` with a flat grey.
    ///
    /// The face normal is `(v2 - v0) × (v1 - v0)` of the model-space vertices,
    /// normalized. Its dot product with the light direction is the intensity;
    /// faces with an intensity of zero or less are culled. The grey level is
    /// `intensity * 255` clamped to the channel range and packed with `format`.
    /// Faces with a zero-length normal or a zero-area projection are skipped.
    pub fn draw_shaded<T, F>(&self, model: &Model, target: &mut T, format: &F, light: &DirectionalLight) -> RenderStats
    where
        T: PixelTarget + ?Sized,
        F: PixelFormat + ?Sized,
    {
        let viewport = Viewport::of(target, self.options.y_axis());
        let mut stats = RenderStats {
            faces: model.face_count(),
            ..RenderStats::default()
        };

        for (index, world) in model.triangles().enumerate() {
            let [w0, w1, w2] = world;
            let normal = match (w2 - w0).cross(&(w1 - w0)).normalize() {
                Ok(normal) => normal,
                Err(err) => {
                    trace!("face {index}: skipped, {err}");
                    stats.degenerate += 1;
                    continue;
                }
            };

            let intensity = light.intensity(&normal);
            if intensity.is_nan() || intensity <= 0.0 {
                stats.culled += 1;
                continue;
            }

            let screen = viewport.project_triangle(&world);
            if doubled_area(&screen) == 0 {
                trace!("face {index}: skipped, zero area on screen");
                stats.degenerate += 1;
                continue;
            }

            let color = grey(format, DirectionalLight::grey_level(intensity));
            self.rasterizer.fill_triangle(&screen, target, color);
            stats.drawn += 1;
        }

        debug!("shaded ({}): {stats}", self.rasterizer.active_type());
        stats
    }

    /// Draw grid lines every `spacing` pixels across the whole target.
    pub fn draw_grid<T: PixelTarget + ?Sized>(&self, target: &mut T, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        for y in 0..target.height() {
            for x in 0..target.width() {
                if x % spacing == 0 || y % spacing == 0 {
                    target.set_pixel(x as i32, y as i32, color);
                }
            }
        }
    }
}

/// Wireframe render with default options.
pub fn mesh<T: PixelTarget + ?Sized>(model: &Model, target: &mut T, color: u32) -> RenderStats {
    Renderer::default().draw_wireframe(model, target, color)
}

/// Flat-shaded render with default options. `light_direction` is used as
/// given, without normalizing.
pub fn surf<T, F>(model: &Model, target: &mut T, format: &F, light_direction: Point3d) -> RenderStats
where
    T: PixelTarget + ?Sized,
    F: PixelFormat + ?Sized,
{
    Renderer::default().draw_shaded(model, target, format, &DirectionalLight::new(light_direction))
}

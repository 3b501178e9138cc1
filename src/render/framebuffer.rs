//! Pixel targets.
//!
//! Rendering writes through the [`PixelTarget`] trait so any surface with a
//! bounds-checked per-pixel accessor can be drawn into. [`FrameBuffer`] is the
//! owned implementation: row-major, origin top-left, `y` growing downward,
//! with an explicit row pitch so rows need not be tightly packed.

use std::path::Path;

use image::{ImageResult, Rgba, RgbaImage};

use crate::colors::{PixelFormat, BACKGROUND};
use crate::error::FrameBufferError;

/// A surface the rasterizer can write packed pixels into.
pub trait PixelTarget {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Mutable access to the pixel at `(x, y)`, or `None` outside the surface.
    fn at(&mut self, x: i32, y: i32) -> Option<&mut u32>;

    /// The pixel at `(x, y)`, or `None` outside the surface.
    fn pixel(&self, x: i32, y: i32) -> Option<u32>;

    /// Write a pixel. Out-of-bounds coordinates are silently ignored.
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(pixel) = self.at(x, y) {
            *pixel = color;
        }
    }
}

/// An owned colour buffer.
///
/// Each row occupies `pitch` pixels of storage, of which the first `width` are
/// visible. Padding pixels are never reachable through [`PixelTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    pitch: u32,
}

impl FrameBuffer {
    /// A tightly packed buffer cleared to [`BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BACKGROUND; width as usize * height as usize],
            width,
            height,
            pitch: width,
        }
    }

    /// A buffer whose rows are `pitch` pixels apart.
    ///
    /// # Errors
    /// [`FrameBufferError::PitchTooSmall`] when `pitch < width`,
    /// [`FrameBufferError::TooLarge`] when the storage size overflows.
    pub fn with_pitch(width: u32, height: u32, pitch: u32) -> Result<Self, FrameBufferError> {
        if pitch < width {
            return Err(FrameBufferError::PitchTooSmall { width, pitch });
        }
        let len = (pitch as usize)
            .checked_mul(height as usize)
            .ok_or(FrameBufferError::TooLarge { width, height })?;
        Ok(Self {
            pixels: vec![BACKGROUND; len],
            width,
            height,
            pitch,
        })
    }

    /// Reallocate as a tightly packed buffer of the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Raw storage including row padding.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The storage as native-endian bytes, ready for a streaming texture
    /// upload with a row length of `pitch * 4` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8. The
        // length covers exactly the same allocation and the borrow ties the
        // slice's lifetime to `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr() as *const u8,
                self.pixels.len() * std::mem::size_of::<u32>(),
            )
        }
    }

    /// Copy the visible pixels into an RGBA image, decoding with `format`.
    pub fn to_image<F: PixelFormat + ?Sized>(&self, format: &F) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(format.unpack(self.pixels[self.index(x, y)]))
        })
    }

    /// Write the visible pixels to a PNG file.
    pub fn save_png<F, P>(&self, format: &F, path: P) -> ImageResult<()>
    where
        F: PixelFormat + ?Sized,
        P: AsRef<Path>,
    {
        self.to_image(format).save_with_format(path, image::ImageFormat::Png)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.pitch as usize + x as usize
    }

    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(self.index(x, y))
    }
}

impl PixelTarget for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn at(&mut self, x: i32, y: i32) -> Option<&mut u32> {
        let index = self.checked_index(x, y)?;
        self.pixels.get_mut(index)
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        let index = self.checked_index(x, y)?;
        self.pixels.get(index).copied()
    }
}

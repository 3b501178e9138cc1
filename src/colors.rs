//! Colour constants and pixel packing.
//!
//! Pixels are stored as `u32`. How the four channels are laid out inside that
//! word depends on the consumer, so packing goes through a [`PixelFormat`].
//! [`Argb8888`] matches the SDL streaming texture used by the viewer and is the
//! default everywhere.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const WIREFRAME: u32 = 0xFFFFFFFF;
pub const FILL: u32 = 0xFF808080;
pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const MAGENTA: u32 = 0xFFFF00FF;

/// Maps between `(r, g, b, a)` channels and a packed `u32` pixel.
pub trait PixelFormat {
    fn map_rgba(&self, r: u8, g: u8, b: u8, a: u8) -> u32;

    /// Channels of a packed pixel as `[r, g, b, a]`.
    fn unpack(&self, pixel: u32) -> [u8; 4];

    /// Pack an opaque colour.
    fn map_rgb(&self, r: u8, g: u8, b: u8) -> u32 {
        self.map_rgba(r, g, b, u8::MAX)
    }
}

/// `0xAARRGGBB`, the layout of SDL's `ARGB8888`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Argb8888;

/// `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba8888;

impl PixelFormat for Argb8888 {
    #[inline]
    fn map_rgba(&self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([a, r, g, b])
    }

    #[inline]
    fn unpack(&self, pixel: u32) -> [u8; 4] {
        let [a, r, g, b] = pixel.to_be_bytes();
        [r, g, b, a]
    }
}

impl PixelFormat for Rgba8888 {
    #[inline]
    fn map_rgba(&self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    #[inline]
    fn unpack(&self, pixel: u32) -> [u8; 4] {
        pixel.to_be_bytes()
    }
}

/// An opaque grey whose channels all equal `level`.
pub fn grey<F: PixelFormat + ?Sized>(format: &F, level: u8) -> u32 {
    format.map_rgb(level, level, level)
}

//! Bresenham line drawing.

use std::mem::swap;

use super::framebuffer::PixelTarget;
use crate::primitives::{Line, Pixel};

/// Draw the segment `(x0, y0) → (x1, y1)` with integer Bresenham stepping.
///
/// Both endpoints are drawn and the pixel set does not depend on which end
/// is given first. Steep segments are stepped along `y` by transposing the
/// coordinates, and the dominant axis is always walked from low to high.
/// Only the stretch of the dominant axis that falls on the target is walked;
/// the stepping state at its first column is computed directly, so the
/// visible pixels are the same as if the whole segment had been stepped.
pub fn line<T: PixelTarget + ?Sized>(x0: i32, y0: i32, x1: i32, y1: i32, target: &mut T, color: u32) {
    let (mut x0, mut y0, mut x1, mut y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let steep = (x1 - x0).abs() < (y1 - y0).abs();
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx_error = x1 - x0;
    let dy_error = 2 * (y1 - y0).abs();
    let y_step = if y1 > y0 { 1 } else { -1 };

    let extent = i64::from(if steep { target.height() } else { target.width() });
    let first = x0.max(0);
    let last = x1.min(extent - 1);
    if first > last {
        return;
    }

    let (steps, mut y_error) = state_after(first - x0, dx_error, dy_error);
    let mut y = y0 + steps * y_step;
    for x in first..=last {
        // x is on the target; y may not even fit an i32
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            if steep {
                target.set_pixel(y, x, color);
            } else {
                target.set_pixel(x, y, color);
            }
        }
        y_error += dy_error;
        if y_error > dx_error {
            y += y_step;
            y_error -= 2 * dx_error;
        }
    }
}

/// Minor-axis steps taken and error accumulated after `columns` columns.
///
/// The loop keeps the error in `(-dx_error, dx_error]`, which pins the step
/// count to `ceil((columns * dy_error - dx_error) / (2 * dx_error))`.
fn state_after(columns: i64, dx_error: i64, dy_error: i64) -> (i64, i64) {
    if columns == 0 {
        return (0, 0);
    }
    let accumulated = i128::from(columns) * i128::from(dy_error);
    let period = 2 * i128::from(dx_error);
    let steps = -(i128::from(dx_error) - accumulated).div_euclid(period);
    let error = accumulated - steps * period;
    // steps <= |dy| and |error| <= dx_error, both well inside i64
    (steps as i64, error as i64)
}

#[inline]
pub fn line_between<T: PixelTarget + ?Sized>(from: Pixel, to: Pixel, target: &mut T, color: u32) {
    line(from.x(), from.y(), to.x(), to.y(), target, color);
}

#[inline]
pub fn draw_line<T: PixelTarget + ?Sized>(segment: &Line<Pixel>, target: &mut T, color: u32) {
    line_between(segment[0], segment[1], target, color);
}

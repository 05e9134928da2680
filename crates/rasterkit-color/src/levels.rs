//! Levels adjustment
//!
//! A levels adjustment remaps brightness with a quadratic tone curve
//! through three control points: the black point maps to 0, the mid point
//! to 128 and the white point to 255. The same curve is applied to every
//! channel.

use crate::{ColorError, ColorResult};
use log::debug;
use rasterkit_core::{Image, Pixel};

/// Output value for the mid control point.
const MID_OUTPUT: f64 = 128.0;
/// Output value for the white control point.
const WHITE_OUTPUT: f64 = 255.0;

/// Quadratic tone curve `y = a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelsCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

impl LevelsCurve {
    /// Fit the curve through `(black, 0)`, `(mid, 128)` and `(white, 255)`.
    ///
    /// Solved in closed form with Cramer's rule.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] unless
    /// `0 <= black < mid < white <= 255`.
    pub fn fit(black: i32, mid: i32, white: i32) -> ColorResult<Self> {
        if !(0 <= black && black < mid && mid < white && white <= 255) {
            return Err(ColorError::InvalidParameters(format!(
                "levels require 0 <= black < mid < white <= 255, got {}, {}, {}",
                black, mid, white
            )));
        }

        let xs = [black as f64, mid as f64, white as f64];
        let ys = [0.0, MID_OUTPUT, WHITE_OUTPUT];
        let m = xs.map(|x| [x * x, x, 1.0]);

        // Distinct x values make the Vandermonde determinant non-zero.
        let d = det3(m);
        let with_column = |col: usize| {
            let mut mc = m;
            for (row, y) in mc.iter_mut().zip(ys) {
                row[col] = y;
            }
            det3(mc) / d
        };

        let curve = LevelsCurve {
            a: with_column(0),
            b: with_column(1),
            c: with_column(2),
        };
        debug!(
            "levels: black={} mid={} white={} -> a={:.6} b={:.6} c={:.6}",
            black, mid, white, curve.a, curve.b, curve.c
        );
        Ok(curve)
    }

    /// Evaluate the curve without rounding or clamping.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Apply the curve to each channel of a pixel.
    pub fn apply(&self, pixel: Pixel) -> Pixel {
        pixel.quadratic_transform(self.a, self.b, self.c)
    }
}

/// Remap image brightness with a levels curve.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] unless
/// `0 <= black < mid < white <= 255`.
///
/// # Example
///
/// ```
/// use rasterkit_color::levels_adjust;
/// use rasterkit_core::{Image, Pixel};
///
/// let img = Image::filled(2, 2, Pixel::new(20, 100, 220)).unwrap();
/// let out = levels_adjust(&img, 20, 100, 220).unwrap();
/// assert_eq!(out.pixel(0, 0), Some(Pixel::new(0, 128, 255)));
/// ```
pub fn levels_adjust(image: &Image, black: i32, mid: i32, white: i32) -> ColorResult<Image> {
    let curve = LevelsCurve::fit(black, mid, white)?;
    Ok(image.map_pixels(|p| curve.apply(p)))
}

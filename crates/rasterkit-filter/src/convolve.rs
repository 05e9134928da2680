//! Convolution operations
//!
//! Implements image convolution with square kernels.
//!
//! # Border handling
//!
//! Kernel taps that land outside the image are skipped entirely. This is
//! neither zero padding nor edge replication: a border pixel only receives
//! the weights of in-bounds neighbors, so a normalized blur darkens edges
//! of a uniform image.

use crate::{FilterKind, FilterResult, Kernel};
use log::debug;
use rasterkit_core::{Image, ImageMut, Pixel};

/// Convolve an RGB image with a kernel.
///
/// Each channel is summed independently in floating point, truncated
/// toward zero and clamped to `[0, 255]` by the pixel constructor. The
/// output has the same dimensions as the input.
///
/// # Example
///
/// ```
/// use rasterkit_core::{Image, Pixel};
/// use rasterkit_filter::{FilterKind, convolve};
///
/// let img = Image::filled(3, 3, Pixel::new(100, 150, 200)).unwrap();
/// let out = convolve(&img, &FilterKind::Blur.kernel()).unwrap();
/// assert_eq!(out.pixel(1, 1), Some(Pixel::new(100, 150, 200)));
/// assert_eq!(out.pixel(0, 0), Some(Pixel::new(56, 84, 112)));
/// ```
pub fn convolve(image: &Image, kernel: &Kernel) -> FilterResult<Image> {
    let (w, h) = image.dimensions();
    let r = kernel.radius() as i32;
    debug!(
        "convolve: {}x{} image with {}x{} kernel",
        w,
        h,
        kernel.size(),
        kernel.size()
    );

    let mut out = ImageMut::new(w, h)?;

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;

            for ky in -r..=r {
                let sy = y + ky;
                if sy < 0 || sy >= h as i32 {
                    continue;
                }
                for kx in -r..=r {
                    let sx = x + kx;
                    if sx < 0 || sx >= w as i32 {
                        continue;
                    }

                    let k = kernel.at_offset(kx, ky);
                    let (pr, pg, pb) = image.pixel_unchecked(sx as u32, sy as u32).rgb();
                    sum_r += k * pr as f64;
                    sum_g += k * pg as f64;
                    sum_b += k * pb as f64;
                }
            }

            out.set_pixel_unchecked(
                x as u32,
                y as u32,
                Pixel::new(sum_r as i32, sum_g as i32, sum_b as i32),
            );
        }
    }

    Ok(out.into())
}

/// Apply one of the named filters.
pub fn apply_filter(image: &Image, kind: FilterKind) -> FilterResult<Image> {
    convolve(image, &kind.kernel())
}

/// Apply the 3x3 blur.
pub fn blur(image: &Image) -> FilterResult<Image> {
    apply_filter(image, FilterKind::Blur)
}

/// Apply the 5x5 sharpen.
pub fn sharpen(image: &Image) -> FilterResult<Image> {
    apply_filter(image, FilterKind::Sharpen)
}

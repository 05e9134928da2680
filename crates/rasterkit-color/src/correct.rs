//! Histogram peak color correction
//!
//! Shifts each channel so the most frequent mid-range value of all three
//! channels lines up. A color cast usually shows up as the red, green and
//! blue histograms peaking at different places; moving each peak to their
//! common average removes the cast without touching contrast.
//!
//! Near-black and near-white values are left out of the peak search so that
//! clipped shadows and highlights do not dominate it.

use crate::{ColorError, ColorResult};
use log::debug;
use rasterkit_core::{Channel, HISTOGRAM_BINS, Histogram, Image};

/// Options for [`color_correct_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCorrectOptions {
    /// Lowest value considered when searching for a peak (inclusive)
    pub peak_low: u32,
    /// Upper end of the peak search window (exclusive)
    pub peak_high: u32,
}

impl Default for ColorCorrectOptions {
    fn default() -> Self {
        Self {
            peak_low: 10,
            peak_high: 245,
        }
    }
}

impl ColorCorrectOptions {
    fn validate(&self) -> ColorResult<()> {
        if self.peak_low >= self.peak_high || self.peak_high as usize > HISTOGRAM_BINS {
            return Err(ColorError::InvalidParameters(format!(
                "peak window [{}, {}) must be non-empty and within [0, {}]",
                self.peak_low, self.peak_high, HISTOGRAM_BINS
            )));
        }
        Ok(())
    }
}

/// Most frequent value in `[low, high)`.
///
/// Ties go to the lowest value. An all-zero window yields `low`.
///
/// # Panics
///
/// Panics if `low >= high` or `high > 256`.
pub fn meaningful_peak(hist: &Histogram, low: u32, high: u32) -> u32 {
    let mut peak = low;
    for v in low + 1..high {
        if hist[v as usize] > hist[peak as usize] {
            peak = v;
        }
    }
    peak
}

/// Align the histogram peaks of the three channels using default options.
///
/// # Example
///
/// ```
/// use rasterkit_color::color_correct;
/// use rasterkit_core::{Image, Pixel};
///
/// let img = Image::filled(4, 4, Pixel::new(100, 130, 160)).unwrap();
/// let out = color_correct(&img).unwrap();
/// assert_eq!(out.pixel(0, 0), Some(Pixel::new(130, 130, 130)));
/// ```
pub fn color_correct(image: &Image) -> ColorResult<Image> {
    color_correct_with_options(image, &ColorCorrectOptions::default())
}

/// Align the histogram peaks of the three channels.
///
/// The target is the integer average of the three peaks; each channel is
/// shifted by `target - peak`, clamping to `[0, 255]`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for an empty or out-of-range
/// peak window.
pub fn color_correct_with_options(
    image: &Image,
    options: &ColorCorrectOptions,
) -> ColorResult<Image> {
    options.validate()?;

    let hist = image.color_histogram();
    let peaks = Channel::ALL.map(|ch| {
        meaningful_peak(hist.channel(ch), options.peak_low, options.peak_high) as i32
    });
    let target = peaks.iter().sum::<i32>() / 3;
    let [dr, dg, db] = peaks.map(|p| target - p);
    debug!(
        "color_correct: peaks r={} g={} b={}, target {}, offsets ({}, {}, {})",
        peaks[0], peaks[1], peaks[2], target, dr, dg, db
    );

    Ok(image.map_pixels(|p| p.offset(dr, dg, db)))
}

//! Image combination
//!
//! Column-wise composition of two same-sized images, used for split
//! previews of an edited image against its original.

use super::{Image, ImageData};
use crate::error::{Error, Result};

impl Image {
    /// Combine two images column-wise.
    ///
    /// The leftmost `width * percentage / 100` columns are taken from `self`
    /// and the remaining columns from `other`. A percentage of 100 yields
    /// `self`, a percentage of 0 yields `other`.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if the images differ in size
    /// - [`Error::InvalidParameter`] if `percentage > 100`
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{Image, Pixel};
    ///
    /// let a = Image::filled(10, 2, Pixel::WHITE).unwrap();
    /// let b = Image::filled(10, 2, Pixel::BLACK).unwrap();
    /// let split = a.combine(&b, 50).unwrap();
    /// assert_eq!(split.pixel(4, 0), Some(Pixel::WHITE));
    /// assert_eq!(split.pixel(5, 0), Some(Pixel::BLACK));
    /// ```
    pub fn combine(&self, other: &Image, percentage: u32) -> Result<Image> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        if percentage > 100 {
            return Err(Error::InvalidParameter(format!(
                "percentage must be in 0..=100, got {}",
                percentage
            )));
        }

        let (w, _) = self.dimensions();
        let split = (w as u64 * percentage as u64 / 100) as usize;

        let pixels = self
            .rows()
            .zip(other.rows())
            .flat_map(|(left, right)| left[..split].iter().chain(&right[split..]))
            .copied()
            .collect();

        Ok(Image::from_data(ImageData {
            width: self.width(),
            height: self.height(),
            pixels,
        }))
    }
}

//! Channel views
//!
//! Functions for extracting a single color channel as a grid of integers
//! and for recombining three such grids into an image.

use super::{Image, ImageData};
use crate::error::{Error, Result};
use crate::pixel::{Channel, Pixel};

/// A read-only H x W grid of integer values, usually one channel of an image.
///
/// Values are not restricted to `[0, 255]`; clamping happens when a view is
/// turned back into pixels with [`Image::from_channels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelView {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl ChannelView {
    /// Create a view from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::InvalidParameter(format!(
                "channel data has {} values, {}x{} requires {}",
                data.len(),
                width,
                height,
                width as usize * height as usize
            )));
        }
        Ok(ChannelView {
            width,
            height,
            data,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// One row of values.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[i32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// All values in row-major order.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }
}

impl Image {
    /// Extract one color channel as a [`ChannelView`].
    pub fn channel(&self, channel: Channel) -> ChannelView {
        ChannelView {
            width: self.width(),
            height: self.height(),
            data: self
                .pixels()
                .iter()
                .map(|p| p.channel(channel) as i32)
                .collect(),
        }
    }

    /// Build an image from red, green and blue channel views.
    ///
    /// Values are clamped to `[0, 255]` by the pixel constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless all three views have the
    /// same dimensions.
    pub fn from_channels(
        red: &ChannelView,
        green: &ChannelView,
        blue: &ChannelView,
    ) -> Result<Image> {
        let expected = (red.width, red.height);
        for view in [green, blue] {
            if (view.width, view.height) != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: (view.width, view.height),
                });
            }
        }

        let pixels = red
            .data
            .iter()
            .zip(&green.data)
            .zip(&blue.data)
            .map(|((&r, &g), &b)| Pixel::new(r, g, b))
            .collect();

        Ok(Image::from_data(ImageData {
            width: red.width,
            height: red.height,
            pixels,
        }))
    }
}

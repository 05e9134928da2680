//! Image - the RGB image container
//!
//! [`Image`] is an immutable, row-major grid of [`Pixel`]s with a fixed
//! width and height, both at least 1. Every transform in rasterkit takes an
//! `&Image` and returns a new `Image`; the input is never modified.
//!
//! # Ownership model
//!
//! `Image` shares its pixel buffer through an `Arc`, so cloning is cheap.
//! To build or edit pixel data, work on an [`ImageMut`] (from
//! [`ImageMut::new`], [`Image::try_into_mut`] or [`Image::to_mut`]) and
//! convert it back with `Into<Image>`.

mod blend;
mod channel;
mod histogram;

pub use channel::ChannelView;
pub use histogram::{ColorHistogram, HISTOGRAM_BINS, Histogram};

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::sync::Arc;

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixels, `width * height` entries
    pixels: Vec<Pixel>,
}

impl ImageData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Immutable RGB image.
///
/// Equality is structural: two images are equal when they have the same
/// dimensions and the same pixels in row-major order.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{Image, Pixel};
///
/// let img = Image::filled(4, 3, Pixel::new(10, 20, 30)).unwrap();
/// assert_eq!(img.width(), 4);
/// assert_eq!(img.height(), 3);
/// assert_eq!(img.pixel(3, 2), Some(Pixel::new(10, 20, 30)));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for Image {}

impl Image {
    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create an image with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        check_dimensions(width, height)?;
        let pixels = vec![pixel; width as usize * height as usize];
        Ok(Self::from_data(ImageData {
            width,
            height,
            pixels,
        }))
    }

    /// Create an image from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if `pixels` is empty
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidParameter`] if `pixels.len() != width * height`
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.is_empty() {
            return Err(Error::NullInput("pixel buffer"));
        }
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "pixel buffer has {} entries, {}x{} requires {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self::from_data(ImageData {
            width,
            height,
            pixels,
        }))
    }

    /// Create an image from a list of rows.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if there are no rows or the first row is empty
    /// - [`Error::InvalidParameter`] if the rows are ragged
    pub fn from_rows(rows: &[Vec<Pixel>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(Error::NullInput("rows"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidParameter(format!(
                "row {} has {} pixels, expected {}",
                y,
                row.len(),
                width
            )));
        }
        let pixels = rows.iter().flatten().copied().collect();
        Self::from_pixels(width as u32, rows.len() as u32, pixels)
    }

    /// Create an image by evaluating `f(x, y)` at every position.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self>
    where
        F: Fn(u32, u32) -> Pixel,
    {
        check_dimensions(width, height)?;
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(Self::from_data(ImageData {
            width,
            height,
            pixels,
        }))
    }

    fn from_data(data: ImageData) -> Self {
        Image {
            inner: Arc::new(data),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.inner.pixels[self.inner.index(x, y)]
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.pixels[start..start + w]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> {
        self.inner.pixels.chunks_exact(self.inner.width as usize)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Apply `f` to every pixel, producing a new image of the same size.
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn(Pixel) -> Pixel,
    {
        Self::from_data(ImageData {
            width: self.inner.width,
            height: self.inner.height,
            pixels: self.inner.pixels.iter().map(|&p| f(p)).collect(),
        })
    }

    /// Try to take exclusive ownership of the pixel buffer.
    ///
    /// Fails, returning `self`, when the buffer is shared with another clone.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable image builder.
///
/// Convert back to an immutable [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a black mutable image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(ImageMut {
            inner: ImageData {
                width,
                height,
                pixels: vec![Pixel::BLACK; width as usize * height as usize],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.pixels[self.inner.index(x, y)])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if (x, y) is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without a bounds check on each axis.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = pixel;
    }

    /// Mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.pixels[start..start + w]
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image::from_data(image_mut.inner)
    }
}

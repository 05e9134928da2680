//! rasterkit core - basic data structures for RGB image editing
//!
//! This crate provides the fundamental types shared by every rasterkit
//! crate:
//!
//! - [`Pixel`] - a clamped 24-bit RGB value and its per-pixel operations
//! - [`Image`] / [`ImageMut`] - the image container (immutable / mutable)
//! - [`ChannelView`] - one color channel as an integer grid
//! - [`Histogram`] / [`ColorHistogram`] - per-channel value frequencies
//!
//! Images never change after construction; every operation returns a new
//! [`Image`]. The crate performs no I/O.

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{ChannelView, ColorHistogram, HISTOGRAM_BINS, Histogram, Image, ImageMut};
pub use pixel::{Channel, ColorTransform, LUMA_WEIGHTS, Pixel, SEPIA_MATRIX};

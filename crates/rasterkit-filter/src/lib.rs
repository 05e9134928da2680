//! rasterkit-filter - Image filtering operations
//!
//! This crate provides spatial convolution of RGB images:
//!
//! - [`Kernel`] - square, odd-sized coefficient matrices
//! - [`FilterKind`] - the named kernels (blur, sharpen)
//! - [`convolve`] / [`apply_filter`] - the convolution engine
//!
//! Taps that fall outside the image are skipped, so border pixels only
//! sum the kernel weights that land on real pixels.

pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{BLUR_3X3, FilterKind, Kernel, SHARPEN_5X5};

pub use convolve::{apply_filter, blur, convolve, sharpen};

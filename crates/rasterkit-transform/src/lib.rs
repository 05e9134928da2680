//! rasterkit-transform - Whole-image transforms
//!
//! This crate provides transforms that rearrange or re-encode pixel data:
//!
//! - Horizontal and vertical flips ([`flip`])
//! - Multi-level 2D Haar wavelet transform ([`haar`])
//! - Lossy Haar compression with per-row thresholding ([`compress`])

pub mod compress;
mod error;
pub mod flip;
pub mod haar;

pub use compress::{compress, compress_channel};
pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_vertical};
pub use haar::{HaarBuffer, padded_side};

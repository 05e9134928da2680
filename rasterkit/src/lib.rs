//! rasterkit - RGB image editing for Rust
//!
//! rasterkit edits images held in memory as grids of RGB pixels.
//!
//! # Overview
//!
//! - Per-pixel color transforms (brightness, components, luma, sepia)
//! - Convolution filters (blur, sharpen)
//! - Lossy Haar wavelet compression
//! - Histogram peak color correction
//! - Quadratic levels adjustment
//!
//! Decoding and encoding files is left to the caller: every function here
//! takes and returns an in-memory [`Image`].
//!
//! # Example
//!
//! ```
//! use rasterkit::{Image, Pixel};
//! use rasterkit::{color, filter, transform};
//!
//! let img = Image::filled(8, 8, Pixel::new(90, 120, 150)).unwrap();
//! let blurred = filter::blur(&img).unwrap();
//! let compressed = transform::compress(&blurred, 25.0).unwrap();
//! let corrected = color::color_correct(&compressed).unwrap();
//! assert_eq!(corrected.dimensions(), (8, 8));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
pub use rasterkit_transform as transform;

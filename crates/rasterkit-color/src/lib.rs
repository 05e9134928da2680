//! rasterkit-color - Color processing for RGB images
//!
//! This crate provides color manipulation functions:
//!
//! - **Adjustments** ([`adjust`]): brightness, channel components, value,
//!   intensity, luma, sepia, split previews
//! - **Color correction** ([`correct`]): histogram peak alignment
//! - **Levels** ([`levels`]): quadratic tone curve through three points

pub mod adjust;
pub mod correct;
pub mod error;
pub mod levels;

// Re-export core types
pub use rasterkit_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use adjust::{
    brighten, color_transform, component, darken, intensity, luma, sepia, split_preview, value,
};
pub use correct::{ColorCorrectOptions, color_correct, color_correct_with_options, meaningful_peak};
pub use levels::{LevelsCurve, levels_adjust};

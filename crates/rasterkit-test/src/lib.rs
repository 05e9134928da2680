//! rasterkit-test - Regression test framework for rasterkit
//!
//! Every `tests/*_reg.rs` file in the workspace drives one [`RegParams`]:
//! it records each comparison with an index, keeps going after a failure,
//! and reports all failures together at [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("convolve");
//! let img = gradient_image(32, 32).unwrap();
//! rp.compare_values(32.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, max_channel_diff};
pub use synthetic::{gradient_image, noise_image, uniform_image};

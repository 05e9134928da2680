//! Deterministic synthetic test images
//!
//! Regression tests build their inputs in memory instead of reading
//! fixtures from disk. Noise images use a seeded LCG so every run sees the
//! same pixels.

use crate::error::{TestError, TestResult};
use rasterkit_core::{Image, Pixel};

/// Image with every pixel set to `(r, g, b)`.
pub fn uniform_image(width: u32, height: u32, r: i32, g: i32, b: i32) -> TestResult<Image> {
    Image::filled(width, height, Pixel::new(r, g, b)).map_err(|source| TestError::ImageBuild {
        name: "uniform",
        source,
    })
}

/// Smooth image: red ramps left to right, green ramps top to bottom and
/// blue follows the diagonal.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Image> {
    let wmax = width.saturating_sub(1).max(1) as f64;
    let hmax = height.saturating_sub(1).max(1) as f64;
    Image::from_fn(width, height, |x, y| {
        let fx = x as f64 / wmax;
        let fy = y as f64 / hmax;
        Pixel::new(
            (fx * 255.0) as i32,
            (fy * 255.0) as i32,
            ((fx + fy) * 127.5) as i32,
        )
    })
    .map_err(|source| TestError::ImageBuild {
        name: "gradient",
        source,
    })
}

/// Pseudo-random image with channels drawn from `[low, high]`.
pub fn noise_image(width: u32, height: u32, low: u8, high: u8, seed: u32) -> TestResult<Image> {
    if low > high {
        return Err(TestError::InvalidParameters(format!(
            "low {} exceeds high {}",
            low, high
        )));
    }
    let span = (high - low) as u64 + 1;
    let mut rng = SimpleRng::new(seed);
    let pixels = (0..width as usize * height as usize)
        .map(|_| {
            let mut channel = || low as i32 + (rng.next() >> 33) as i32 % span as i32;
            let r = channel();
            let g = channel();
            let b = channel();
            Pixel::new(r, g, b)
        })
        .collect();
    Image::from_pixels(width, height, pixels).map_err(|source| TestError::ImageBuild {
        name: "noise",
        source,
    })
}

/// Simple linear congruential generator for reproducible test data
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

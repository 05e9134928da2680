//! Convolution kernels
//!
//! Defines the square kernel type used by the convolution engine and the
//! constant tables behind the named filters.

use crate::{FilterError, FilterResult};
use rasterkit_core::Error;

/// 3x3 Gaussian-like blur: center 1/4, edges 1/8, corners 1/16.
pub const BLUR_3X3: [[f64; 3]; 3] = [
    [0.0625, 0.125, 0.0625],
    [0.125, 0.25, 0.125],
    [0.0625, 0.125, 0.0625],
];

/// 5x5 sharpen: center 1, inner ring 1/4, outer ring -1/8.
pub const SHARPEN_5X5: [[f64; 5]; 5] = [
    [-0.125, -0.125, -0.125, -0.125, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, 0.25, 1.0, 0.25, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, -0.125, -0.125, -0.125, -0.125],
];

/// Named filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Gaussian-like 3x3 blur
    Blur,
    /// 5x5 sharpen
    Sharpen,
}

impl FilterKind {
    /// The kernel for this filter.
    pub fn kernel(self) -> Kernel {
        match self {
            FilterKind::Blur => Kernel::from_table(&BLUR_3X3),
            FilterKind::Sharpen => Kernel::from_table(&SHARPEN_5X5),
        }
    }
}

/// A square convolution kernel with odd side length.
///
/// The origin is the center element; offsets run from `-radius` to
/// `radius` on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major coefficients.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] (wrapped in [`FilterError::Core`]) if `data`
    ///   is empty
    /// - [`FilterError::InvalidKernel`] if `size` is even, `data` does not
    ///   hold `size * size` values, or a coefficient is not finite
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_filter::Kernel;
    ///
    /// let k = Kernel::new(3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(k.radius(), 1);
    /// assert!(Kernel::new(2, &[0.25; 4]).is_err());
    /// ```
    pub fn new(size: u32, data: &[f64]) -> FilterResult<Self> {
        if data.is_empty() {
            return Err(Error::NullInput("kernel data").into());
        }
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side length must be odd, got {}",
                size
            )));
        }
        let expected = size as usize * size as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "{}x{} kernel needs {} values, got {}",
                size,
                size,
                expected,
                data.len()
            )));
        }
        if let Some(v) = data.iter().find(|v| !v.is_finite()) {
            return Err(FilterError::InvalidKernel(format!(
                "non-finite coefficient {}",
                v
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Build a kernel from a constant square table.
    ///
    /// `N` must be odd; the named tables in this module are.
    fn from_table<const N: usize>(table: &[[f64; N]; N]) -> Self {
        Kernel {
            size: N as u32,
            data: table.iter().flatten().copied().collect(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to an edge, `(size - 1) / 2`.
    #[inline]
    pub fn radius(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Get the value at an offset from the center.
    ///
    /// # Panics
    ///
    /// Panics if either offset exceeds the radius.
    #[inline]
    pub fn at_offset(&self, dx: i32, dy: i32) -> f64 {
        let r = self.radius() as i32;
        let idx = (dy + r) as usize * self.size as usize + (dx + r) as usize;
        self.data[idx]
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

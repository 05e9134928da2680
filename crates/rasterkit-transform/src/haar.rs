//! Two-dimensional Haar wavelet transform
//!
//! A [`HaarBuffer`] holds one channel padded with zeros to a power-of-two
//! square. The transform is the standard multi-level decomposition:
//!
//! - **Forward**: while the active side `L > 1`, apply the pairwise
//!   butterfly to every row of the `L x L` top-left region, then to every
//!   column, and halve `L`. Detail coefficients outside the active region
//!   are left alone.
//! - **Inverse**: starting from `L = 2` and doubling up to the full side,
//!   undo the butterfly on every column, then every row.
//!
//! The butterfly maps a pair `(a, b)` to `(a + b) / sqrt(2)` in the first
//! half of the vector and `(a - b) / sqrt(2)` in the second half.

use crate::{TransformError, TransformResult};
use rasterkit_core::ChannelView;
use std::f64::consts::SQRT_2;

/// Smallest power-of-two side that holds a `width x height` grid.
pub fn padded_side(width: u32, height: u32) -> usize {
    (width.max(height).max(1) as usize).next_power_of_two()
}

/// Validate a compression percentage: finite and strictly inside (0, 100).
pub(crate) fn check_percentage(percentage: f64) -> TransformResult<()> {
    if !(percentage > 0.0 && percentage < 100.0) {
        return Err(TransformError::InvalidParameters(format!(
            "percentage must be in (0, 100), got {}",
            percentage
        )));
    }
    Ok(())
}

/// One forward butterfly pass over `values`, using `scratch` as temporary
/// storage. `values.len()` must be even.
fn haar_step(values: &mut [f64], scratch: &mut Vec<f64>) {
    let half = values.len() / 2;
    scratch.clear();
    scratch.resize(values.len(), 0.0);
    for i in 0..half {
        let a = values[2 * i];
        let b = values[2 * i + 1];
        scratch[i] = (a + b) / SQRT_2;
        scratch[half + i] = (a - b) / SQRT_2;
    }
    values.copy_from_slice(scratch);
}

/// Inverse of [`haar_step`].
fn inverse_haar_step(values: &mut [f64], scratch: &mut Vec<f64>) {
    let half = values.len() / 2;
    scratch.clear();
    scratch.resize(values.len(), 0.0);
    for i in 0..half {
        let f = values[i];
        let s = values[half + i];
        scratch[2 * i] = (f + s) / SQRT_2;
        scratch[2 * i + 1] = (f - s) / SQRT_2;
    }
    values.copy_from_slice(scratch);
}

/// Call-scoped scratch matrix for the Haar transform of one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct HaarBuffer {
    /// Padded side length (power of two)
    side: usize,
    /// Row-major coefficients, `side * side` entries
    data: Vec<f64>,
}

impl HaarBuffer {
    /// Copy a channel into a zero-padded square buffer.
    pub fn from_channel(view: &ChannelView) -> Self {
        let side = padded_side(view.width(), view.height());
        let mut data = vec![0.0; side * side];
        for y in 0..view.height() {
            let dst = y as usize * side;
            for (slot, &v) in data[dst..].iter_mut().zip(view.row(y)) {
                *slot = v as f64;
            }
        }
        HaarBuffer { side, data }
    }

    /// Padded side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Coefficient at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.side + x]
    }

    /// One row of coefficients.
    pub fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.side..(y + 1) * self.side]
    }

    fn row_mut(&mut self, y: usize, len: usize) -> &mut [f64] {
        let start = y * self.side;
        &mut self.data[start..start + len]
    }

    /// Apply `step` to the first `len` entries of column `x`.
    fn map_column(
        &mut self,
        x: usize,
        len: usize,
        column: &mut Vec<f64>,
        scratch: &mut Vec<f64>,
        step: fn(&mut [f64], &mut Vec<f64>),
    ) {
        column.clear();
        column.extend((0..len).map(|y| self.data[y * self.side + x]));
        step(column, scratch);
        for (y, &v) in column.iter().enumerate() {
            self.data[y * self.side + x] = v;
        }
    }

    /// Full multi-level forward transform.
    pub fn forward(&mut self) {
        let mut scratch = Vec::with_capacity(self.side);
        let mut column = Vec::with_capacity(self.side);
        let mut len = self.side;
        while len > 1 {
            for y in 0..len {
                haar_step(self.row_mut(y, len), &mut scratch);
            }
            for x in 0..len {
                self.map_column(x, len, &mut column, &mut scratch, haar_step);
            }
            len /= 2;
        }
    }

    /// Full multi-level inverse transform.
    pub fn inverse(&mut self) {
        let mut scratch = Vec::with_capacity(self.side);
        let mut column = Vec::with_capacity(self.side);
        let mut len = 2;
        while len <= self.side {
            for x in 0..len {
                self.map_column(x, len, &mut column, &mut scratch, inverse_haar_step);
            }
            for y in 0..len {
                inverse_haar_step(self.row_mut(y, len), &mut scratch);
            }
            len *= 2;
        }
    }

    /// Number of smallest magnitudes that fix each row's threshold:
    /// `ceil(side * percentage / 100)`, kept within `1..=side`.
    pub fn threshold_rank(&self, percentage: f64) -> usize {
        let rank = (self.side as f64 * percentage / 100.0).ceil() as usize;
        rank.clamp(1, self.side)
    }

    /// Zero small coefficients, one row at a time.
    ///
    /// For each row the threshold is the `threshold_rank`-th smallest
    /// absolute value in that row; entries strictly below it become zero.
    /// Rows are thresholded independently of one another.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] unless
    /// `0 < percentage < 100`.
    pub fn threshold_rows(&mut self, percentage: f64) -> TransformResult<()> {
        check_percentage(percentage)?;
        let rank = self.threshold_rank(percentage);
        let mut magnitudes = Vec::with_capacity(self.side);
        for row in self.data.chunks_exact_mut(self.side) {
            magnitudes.clear();
            magnitudes.extend(row.iter().map(|v| v.abs()));
            magnitudes.sort_unstable_by(f64::total_cmp);
            let threshold = magnitudes[rank - 1];
            for v in row.iter_mut() {
                if v.abs() < threshold {
                    *v = 0.0;
                }
            }
        }
        Ok(())
    }

    /// Number of coefficients exactly equal to zero, per row.
    pub fn zero_count_per_row(&self) -> Vec<usize> {
        self.data
            .chunks_exact(self.side)
            .map(|row| row.iter().filter(|&&v| v == 0.0).count())
            .collect()
    }

    /// Take the top-left `width x height` region, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if the region does not
    /// fit in the buffer.
    pub fn to_channel(&self, width: u32, height: u32) -> TransformResult<ChannelView> {
        if width as usize > self.side || height as usize > self.side {
            return Err(TransformError::InvalidParameters(format!(
                "{}x{} region exceeds {}x{} buffer",
                width, height, self.side, self.side
            )));
        }
        let data = (0..height as usize)
            .flat_map(|y| self.row(y)[..width as usize].iter())
            .map(|&v| v as i32)
            .collect();
        Ok(ChannelView::from_vec(width, height, data)?)
    }
}

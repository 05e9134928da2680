//! Lossy Haar compression
//!
//! Each color channel is padded, transformed with the multi-level Haar
//! transform, thresholded row by row, transformed back and cropped to the
//! original size. Channels never interact, so they are processed in
//! parallel and recombined positionally.

use crate::haar::{HaarBuffer, check_percentage};
use crate::TransformResult;
use log::{debug, trace};
use rasterkit_core::{Channel, ChannelView, Image};
use rayon::prelude::*;

/// Compress an image by discarding small Haar coefficients.
///
/// `percentage` controls how aggressive the thresholding is: for each row
/// of the transformed matrix, coefficients smaller in magnitude than the
/// `ceil(side * percentage / 100)`-th smallest one are zeroed.
///
/// # Errors
///
/// Returns [`crate::TransformError::InvalidParameters`] unless
/// `0 < percentage < 100`.
///
/// # Example
///
/// ```
/// use rasterkit_core::{Image, Pixel};
/// use rasterkit_transform::compress;
///
/// let img = Image::filled(4, 4, Pixel::new(80, 90, 100)).unwrap();
/// let out = compress(&img, 50.0).unwrap();
/// assert_eq!(out.dimensions(), (4, 4));
/// assert!(compress(&img, 100.0).is_err());
/// ```
pub fn compress(image: &Image, percentage: f64) -> TransformResult<Image> {
    check_percentage(percentage)?;
    let (w, h) = image.dimensions();
    debug!("compress: {}x{} image at {}%", w, h, percentage);

    let channels = Channel::ALL
        .par_iter()
        .map(|&ch| compress_channel(&image.channel(ch), percentage))
        .collect::<TransformResult<Vec<ChannelView>>>()?;

    Ok(Image::from_channels(
        &channels[0],
        &channels[1],
        &channels[2],
    )?)
}

/// Compress one channel view.
///
/// The result has the same dimensions as `view`; values are truncated
/// toward zero but not clamped.
///
/// # Errors
///
/// Returns [`crate::TransformError::InvalidParameters`] unless
/// `0 < percentage < 100`.
pub fn compress_channel(view: &ChannelView, percentage: f64) -> TransformResult<ChannelView> {
    check_percentage(percentage)?;
    let mut buffer = HaarBuffer::from_channel(view);
    trace!(
        "compress_channel: padded {}x{} to side {}, threshold rank {}",
        view.width(),
        view.height(),
        buffer.side(),
        buffer.threshold_rank(percentage)
    );

    buffer.forward();
    buffer.threshold_rows(percentage)?;
    buffer.inverse();
    buffer.to_channel(view.width(), view.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::Pixel;

    #[test]
    fn test_percentage_bounds() {
        let img = Image::filled(3, 3, Pixel::gray(50)).unwrap();
        assert!(compress(&img, 0.0).is_err());
        assert!(compress(&img, 100.0).is_err());
        assert!(compress(&img, -5.0).is_err());
        assert!(compress(&img, 1.0).is_ok());
        assert!(compress(&img, 99.0).is_ok());
    }

    #[test]
    fn test_single_pixel_is_untouched() {
        let img = Image::filled(1, 1, Pixel::new(12, 34, 56)).unwrap();
        assert_eq!(compress(&img, 90.0).unwrap(), img);
    }

    #[test]
    fn test_channels_are_independent() {
        let img = Image::from_fn(5, 3, |x, y| Pixel::new((x * 40) as i32, (y * 60) as i32, 77)).unwrap();
        let out = compress(&img, 60.0).unwrap();
        for ch in Channel::ALL {
            let alone = compress_channel(&img.channel(ch), 60.0).unwrap();
            assert_eq!(out.channel(ch), clamp_view(&alone));
        }
    }

    fn clamp_view(view: &ChannelView) -> ChannelView {
        let data = view.data().iter().map(|v| (*v).clamp(0, 255)).collect();
        ChannelView::from_vec(view.width(), view.height(), data).unwrap()
    }
}

//! Per-pixel color adjustments
//!
//! Image-level wrappers around the [`Pixel`] operations. Each one is a
//! single [`Image::map_pixels`] pass and never fails.

use crate::ColorResult;
use rasterkit_core::{Channel, ColorTransform, Image, Pixel};

/// Add `amount` to every channel of every pixel, clamping to `[0, 255]`.
pub fn brighten(image: &Image, amount: i32) -> Image {
    image.map_pixels(|p| p.adjust_brightness(amount))
}

/// Subtract `amount` from every channel of every pixel, clamping to `[0, 255]`.
pub fn darken(image: &Image, amount: i32) -> Image {
    brighten(image, amount.saturating_neg())
}

/// Gray image carrying one channel of the input.
pub fn component(image: &Image, channel: Channel) -> Image {
    image.map_pixels(|p| p.component(channel))
}

/// Gray image of `max(r, g, b)`.
pub fn value(image: &Image) -> Image {
    image.map_pixels(Pixel::value)
}

/// Gray image of the truncated channel mean.
pub fn intensity(image: &Image) -> Image {
    image.map_pixels(Pixel::intensity)
}

/// Gray image of the weighted luma.
pub fn luma(image: &Image) -> Image {
    color_transform(image, ColorTransform::Luma)
}

/// Sepia-toned image.
pub fn sepia(image: &Image) -> Image {
    color_transform(image, ColorTransform::Sepia)
}

/// Apply a fixed color matrix to every pixel.
pub fn color_transform(image: &Image, transform: ColorTransform) -> Image {
    image.map_pixels(|p| p.transform(transform))
}

/// Show `edited` on the left `percentage`% of the columns and `original` on
/// the rest.
///
/// # Errors
///
/// Fails if the images differ in size or `percentage > 100`.
pub fn split_preview(original: &Image, edited: &Image, percentage: u32) -> ColorResult<Image> {
    Ok(edited.combine(original, percentage)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        Image::from_fn(4, 2, |x, y| Pixel::new(60 * x as i32, 100 * y as i32, 30)).unwrap()
    }

    #[test]
    fn test_brighten_darken() {
        let img = sample();
        let up = brighten(&img, 100);
        assert_eq!(up.pixel(3, 1), Some(Pixel::new(255, 200, 130)));
        let down = darken(&img, 40);
        assert_eq!(down.pixel(1, 0), Some(Pixel::new(20, 0, 0)));
        assert_eq!(darken(&img, i32::MIN), brighten(&img, i32::MAX));
    }

    #[test]
    fn test_gray_outputs() {
        let img = sample();
        for out in [
            component(&img, Channel::Green),
            value(&img),
            intensity(&img),
            luma(&img),
        ] {
            assert_eq!(out.dimensions(), img.dimensions());
            assert!(out.pixels().iter().all(|p| p.red() == p.green() && p.green() == p.blue()));
        }
        assert_eq!(component(&img, Channel::Red).pixel(2, 0), Some(Pixel::gray(120)));
        assert_eq!(value(&img).pixel(0, 1), Some(Pixel::gray(100)));
    }

    #[test]
    fn test_sepia_matches_pixel_op() {
        let img = sample();
        let out = sepia(&img);
        for (a, b) in img.pixels().iter().zip(out.pixels()) {
            assert_eq!(a.sepia(), *b);
        }
    }

    #[test]
    fn test_split_preview() {
        let img = sample();
        let edited = brighten(&img, 10);
        let preview = split_preview(&img, &edited, 50).unwrap();
        assert_eq!(preview.pixel(1, 0), edited.pixel(1, 0));
        assert_eq!(preview.pixel(2, 0), img.pixel(2, 0));
        let small = Image::filled(2, 2, Pixel::BLACK).unwrap();
        assert!(split_preview(&small, &edited, 50).is_err());
    }
}

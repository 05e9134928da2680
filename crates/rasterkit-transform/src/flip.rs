//! Mirror flips

use rasterkit_core::Image;

/// Flip an image left-right (horizontal mirror)
///
/// Column `x` of the output is column `w - 1 - x` of the input.
pub fn flip_horizontal(image: &Image) -> Image {
    let mut out = image.to_mut();
    for y in 0..image.height() {
        out.row_mut(y).reverse();
    }
    out.into()
}

/// Flip an image top-bottom (vertical mirror)
///
/// Row `y` of the output is row `h - 1 - y` of the input.
pub fn flip_vertical(image: &Image) -> Image {
    let h = image.height();
    let mut out = image.to_mut();
    for y in 0..h {
        out.row_mut(y).copy_from_slice(image.row(h - 1 - y));
    }
    out.into()
}

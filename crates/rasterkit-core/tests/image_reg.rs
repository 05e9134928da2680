//! Image container regression test
//!
//! Construction, copy-on-write mutation, channel views and column-wise
//! combination.

use rasterkit_core::{Channel, ChannelView, Error, Image, Pixel};
use rasterkit_test::{RegParams, gradient_image, noise_image, uniform_image};

#[test]
fn image_reg() {
    let mut rp = RegParams::new("image");

    // --- Construction ---
    let img = gradient_image(17, 9).unwrap();
    rp.compare_values(17.0, img.width() as f64, 0.0);
    rp.compare_values(9.0, img.height() as f64, 0.0);
    rp.compare_values((17 * 9) as f64, img.pixels().len() as f64, 0.0);
    rp.compare_values(1.0, if img.pixel(17, 0).is_none() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if img.pixel(0, 9).is_none() { 1.0 } else { 0.0 }, 0.0);

    let zero_sized = [Image::new(0, 5), Image::new(5, 0), Image::filled(0, 0, Pixel::WHITE)];
    for result in zero_sized {
        let rejected = matches!(result, Err(Error::InvalidDimension { .. }));
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }
    let ragged = Image::from_rows(&[vec![Pixel::BLACK; 3], vec![Pixel::BLACK; 2]]);
    rp.compare_values(1.0, if ragged.is_err() { 1.0 } else { 0.0 }, 0.0);

    let rebuilt = Image::from_rows(&img.rows().map(|row| row.to_vec()).collect::<Vec<_>>()).unwrap();
    rp.compare_images(&img, &rebuilt);

    // --- Copy-on-write ---
    let shared = img.clone();
    let mut edit = shared.to_mut();
    edit.set_pixel(3, 4, Pixel::new(1, 2, 3)).unwrap();
    let edited: Image = edit.into();
    rp.compare_images(&img, &shared);
    rp.compare_values(1.0, edited.pixel(3, 4).map_or(0.0, |p| if p.rgb() == (1, 2, 3) { 1.0 } else { 0.0 }), 0.0);
    rp.compare_values(1.0, if edited != img { 1.0 } else { 0.0 }, 0.0);

    // a second handle prevents in-place mutation
    let handle = img.clone();
    let img = match img.try_into_mut() {
        Ok(_) => panic!("shared image converted in place"),
        Err(img) => img,
    };
    drop(handle);
    drop(shared);
    rp.compare_values(1.0, if img.try_into_mut().is_ok() { 1.0 } else { 0.0 }, 0.0);

    let mut unique = uniform_image(4, 4, 0, 0, 0).unwrap().to_mut();
    let out_of_bounds = unique.set_pixel(4, 0, Pixel::WHITE);
    rp.compare_values(1.0, if matches!(out_of_bounds, Err(Error::IndexOutOfBounds { .. })) { 1.0 } else { 0.0 }, 0.0);

    // --- Channel views ---
    let noise = noise_image(13, 11, 0, 255, 7).unwrap();
    let [r, g, b] = Channel::ALL.map(|ch| noise.channel(ch));
    rp.compare_images(&noise, &Image::from_channels(&r, &g, &b).unwrap());
    for (pixel, &v) in noise.pixels().iter().zip(g.data()) {
        rp.compare_values(pixel.green() as f64, v as f64, 0.0);
    }

    let wide = ChannelView::from_vec(2, 1, vec![-40, 400]).unwrap();
    let clamped = Image::from_channels(&wide, &wide, &wide).unwrap();
    rp.compare_values(0.0, clamped.pixel_unchecked(0, 0).red() as f64, 0.0);
    rp.compare_values(255.0, clamped.pixel_unchecked(1, 0).red() as f64, 0.0);
    let mismatched = Image::from_channels(&r, &g, &wide);
    rp.compare_values(1.0, if matches!(mismatched, Err(Error::DimensionMismatch { .. })) { 1.0 } else { 0.0 }, 0.0);

    // --- map_pixels keeps dimensions ---
    let inverted = noise.map_pixels(|p| {
        let (r, g, b) = p.rgb();
        Pixel::new(255 - r as i32, 255 - g as i32, 255 - b as i32)
    });
    rp.compare_values(13.0, inverted.width() as f64, 0.0);
    rp.compare_values(11.0, inverted.height() as f64, 0.0);
    rp.compare_images(&noise, &inverted.map_pixels(|p| {
        let (r, g, b) = p.rgb();
        Pixel::new(255 - r as i32, 255 - g as i32, 255 - b as i32)
    }));

    assert!(rp.cleanup(), "image regression test failed");
}

#[test]
fn combine_reg() {
    let mut rp = RegParams::new("combine");

    let left = uniform_image(10, 3, 255, 0, 0).unwrap();
    let right = uniform_image(10, 3, 0, 0, 255).unwrap();

    rp.compare_images(&left, &left.combine(&right, 100).unwrap());
    rp.compare_images(&right, &left.combine(&right, 0).unwrap());

    for pct in [0u32, 10, 25, 33, 50, 99, 100] {
        let split = 10 * pct / 100;
        let out = left.combine(&right, pct).unwrap();
        for y in 0..3 {
            for x in 0..10 {
                let expected = if x < split { Pixel::new(255, 0, 0) } else { Pixel::new(0, 0, 255) };
                rp.compare_values(1.0, if out.pixel_unchecked(x, y) == expected { 1.0 } else { 0.0 }, 0.0);
            }
        }
    }

    let other_size = uniform_image(9, 3, 0, 0, 0).unwrap();
    rp.compare_values(1.0, if left.combine(&other_size, 50).is_err() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if left.combine(&right, 101).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "combine regression test failed");
}

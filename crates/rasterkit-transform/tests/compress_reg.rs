//! Haar compression regression test
//!
//! Covers the wavelet transform itself (orthonormality, exact inversion,
//! per-row thresholding) and the image-level compressor built on it.

use rasterkit_core::{Channel, Pixel};
use rasterkit_test::{RegParams, gradient_image, noise_image, uniform_image};
use rasterkit_transform::{HaarBuffer, TransformError, compress, compress_channel, padded_side};

#[test]
fn haar_reg() {
    let mut rp = RegParams::new("haar");

    // --- Padding ---
    for (w, h, side) in [(1, 1, 1), (2, 2, 2), (3, 1, 4), (40, 30, 64), (64, 64, 64), (65, 2, 128)] {
        rp.compare_values(side as f64, padded_side(w, h) as f64, 0.0);
    }

    let noise = noise_image(40, 30, 0, 255, 11).unwrap();
    let view = noise.channel(Channel::Green);
    let original = HaarBuffer::from_channel(&view);
    rp.compare_values(64.0, original.side() as f64, 0.0);

    // --- Forward transform preserves energy ---
    let energy = |buf: &HaarBuffer| -> f64 {
        (0..buf.side()).map(|y| buf.row(y).iter().map(|v| v * v).sum::<f64>()).sum()
    };
    let mut coeffs = original.clone();
    coeffs.forward();
    let e0 = energy(&original);
    rp.compare_values(1.0, energy(&coeffs) / e0, 1e-9);

    // --- Inverse undoes forward ---
    let mut back = coeffs.clone();
    back.inverse();
    let mut max_err = 0.0f64;
    for y in 0..original.side() {
        for (a, b) in back.row(y).iter().zip(original.row(y)) {
            max_err = max_err.max((a - b).abs());
        }
    }
    rp.compare_values(0.0, max_err, 1e-6);

    // --- Zeroed coefficients grow with the percentage, row by row ---
    let mut previous = coeffs.zero_count_per_row();
    for pct in [5.0, 10.0, 25.0, 40.0, 50.0, 75.0, 90.0, 99.0] {
        let mut thresholded = coeffs.clone();
        thresholded.threshold_rows(pct).unwrap();
        let zeros = thresholded.zero_count_per_row();
        let monotonic = zeros.iter().zip(&previous).all(|(now, before)| now >= before);
        rp.compare_values(1.0, if monotonic { 1.0 } else { 0.0 }, 0.0);
        previous = zeros;
    }

    // --- Rank follows ceil(side * p / 100) ---
    for (pct, rank) in [(0.5, 1), (1.0, 1), (10.0, 7), (50.0, 32), (99.0, 64)] {
        rp.compare_values(rank as f64, coeffs.threshold_rank(pct) as f64, 0.0);
    }

    // --- Cropping back to the original size ---
    let channel = back.to_channel(40, 30).unwrap();
    rp.compare_values(40.0, channel.width() as f64, 0.0);
    rp.compare_values(30.0, channel.height() as f64, 0.0);
    rp.compare_values(1.0, if back.to_channel(65, 1).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "haar regression test failed");
}

#[test]
fn compress_reg() {
    let mut rp = RegParams::new("compress");

    // --- Percentage bounds ---
    let small = noise_image(5, 3, 0, 255, 5).unwrap();
    for pct in [0.0, 100.0, -1.0, 100.5, f64::NAN, f64::INFINITY] {
        let rejected = matches!(compress(&small, pct), Err(TransformError::InvalidParameters(_)));
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }
    for pct in 1..=99 {
        let out = compress(&small, pct as f64);
        let ok = out.map(|img| img.dimensions() == (5, 3)).unwrap_or(false);
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Light compression is nearly lossless ---
    // side 32 at 1% keeps every coefficient, leaving only truncation error
    let ramp = gradient_image(32, 24).unwrap();
    let light = compress(&ramp, 1.0).unwrap();
    rp.compare_similar_images(&ramp, &light, 1);

    // --- Dimensions survive any size ---
    for (w, h) in [(1, 1), (1, 9), (9, 1), (17, 5), (64, 33)] {
        let img = noise_image(w, h, 0, 255, w + h).unwrap();
        let out = compress(&img, 60.0).unwrap();
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
    }

    // --- Gray input stays gray ---
    let gray = noise_image(20, 12, 0, 255, 8).unwrap().map_pixels(Pixel::intensity);
    let out = compress(&gray, 70.0).unwrap();
    let all_gray = out.pixels().iter().all(|p| p.red() == p.green() && p.green() == p.blue());
    rp.compare_values(1.0, if all_gray { 1.0 } else { 0.0 }, 0.0);

    // --- Channels are compressed independently ---
    let color = noise_image(12, 10, 30, 220, 21).unwrap();
    let out = compress(&color, 45.0).unwrap();
    for ch in Channel::ALL {
        let alone = compress_channel(&color.channel(ch), 45.0).unwrap();
        for (v, p) in alone.data().iter().zip(out.pixels()) {
            rp.compare_values((*v).clamp(0, 255) as f64, p.channel(ch) as f64, 0.0);
        }
    }

    // --- A constant square keeps only its DC term ---
    let flat = uniform_image(8, 8, 100, 100, 100).unwrap();
    rp.compare_similar_images(&flat, &compress(&flat, 99.0).unwrap(), 1);

    assert!(rp.cleanup(), "compress regression test failed");
}

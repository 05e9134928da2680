//! Histogram regression test

use rasterkit_core::{Channel, HISTOGRAM_BINS, Image, Pixel};
use rasterkit_test::{RegParams, gradient_image, noise_image, uniform_image};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Totals equal the pixel count ---
    let images = [
        uniform_image(1, 1, 0, 0, 0).unwrap(),
        uniform_image(7, 3, 12, 200, 255).unwrap(),
        gradient_image(64, 40).unwrap(),
        noise_image(33, 21, 0, 255, 1).unwrap(),
        noise_image(50, 50, 90, 110, 99).unwrap(),
    ];
    for img in &images {
        let total = (img.width() * img.height()) as f64;
        let hist = img.color_histogram();
        for ch in Channel::ALL {
            let sum: u64 = hist.channel(ch).iter().map(|&c| c as u64).sum();
            rp.compare_values(total, sum as f64, 0.0);
            rp.compare_values(1.0, if *hist.channel(ch) == img.histogram(ch) { 1.0 } else { 0.0 }, 0.0);
        }
    }

    // --- Bins land where the values are ---
    let img = uniform_image(7, 3, 12, 200, 255).unwrap();
    rp.compare_values(21.0, img.histogram(Channel::Red)[12] as f64, 0.0);
    rp.compare_values(21.0, img.histogram(Channel::Green)[200] as f64, 0.0);
    rp.compare_values(21.0, img.histogram(Channel::Blue)[HISTOGRAM_BINS - 1] as f64, 0.0);

    // --- Bounded noise stays in its range ---
    let hist = images[4].histogram(Channel::Green);
    let outside: u32 = hist
        .iter()
        .enumerate()
        .filter(|(v, _)| !(90..=110).contains(v))
        .map(|(_, &c)| c)
        .sum();
    rp.compare_values(0.0, outside as f64, 0.0);

    // --- Counting matches a direct scan ---
    let noise = &images[3];
    let fives = noise.pixels().iter().filter(|p| p.blue() == 5).count();
    rp.compare_values(fives as f64, noise.histogram(Channel::Blue)[5] as f64, 0.0);

    let two = Image::from_fn(2, 1, |x, _| if x == 0 { Pixel::BLACK } else { Pixel::WHITE }).unwrap();
    let hist = two.histogram(Channel::Red);
    rp.compare_values(1.0, hist[0] as f64, 0.0);
    rp.compare_values(1.0, hist[255] as f64, 0.0);

    assert!(rp.cleanup(), "histogram regression test failed");
}

//! Histogram generation for images
//!
//! Functions to compute per-channel pixel value distributions.

use super::Image;
use crate::pixel::Channel;

/// Number of bins in a channel histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// Frequency of each value `0..=255` in one channel.
pub type Histogram = [u32; HISTOGRAM_BINS];

/// RGB channel histograms
///
/// Contains separate 256-bin histograms for red, green, and blue channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    /// Red channel histogram
    pub red: Histogram,
    /// Green channel histogram
    pub green: Histogram,
    /// Blue channel histogram
    pub blue: Histogram,
}

impl ColorHistogram {
    /// Histogram of the selected channel.
    pub fn channel(&self, channel: Channel) -> &Histogram {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

impl Image {
    /// Count occurrences of each value of one channel.
    ///
    /// The bins always sum to `width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{Channel, Image, Pixel};
    ///
    /// let img = Image::filled(4, 4, Pixel::new(1, 2, 3)).unwrap();
    /// let hist = img.histogram(Channel::Green);
    /// assert_eq!(hist[2], 16);
    /// ```
    pub fn histogram(&self, channel: Channel) -> Histogram {
        let mut hist = [0u32; HISTOGRAM_BINS];
        for p in self.pixels() {
            hist[p.channel(channel) as usize] += 1;
        }
        hist
    }

    /// Histograms of all three channels, computed in one pass.
    pub fn color_histogram(&self) -> ColorHistogram {
        let mut red = [0u32; HISTOGRAM_BINS];
        let mut green = [0u32; HISTOGRAM_BINS];
        let mut blue = [0u32; HISTOGRAM_BINS];
        for p in self.pixels() {
            let (r, g, b) = p.rgb();
            red[r as usize] += 1;
            green[g as usize] += 1;
            blue[b as usize] += 1;
        }
        ColorHistogram { red, green, blue }
    }
}

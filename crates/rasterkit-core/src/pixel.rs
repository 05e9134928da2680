//! Pixel - 24-bit RGB value type
//!
//! A [`Pixel`] holds three 8-bit channels. Every constructor clamps its
//! integer inputs to `[0, 255]`, so a `Pixel` can never hold an
//! out-of-range channel. All operations return a new `Pixel`.
//!
//! # Rounding
//!
//! Channel arithmetic truncates toward zero (integer cast semantics). The
//! single exception is [`Pixel::quadratic_transform`], which rounds to the
//! nearest integer. Output compatibility depends on this asymmetry.

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in red, green, blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel in an `(r, g, b)` triple.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Lower-case channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Luma weights (Rec. 709) applied to `(r, g, b)`.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Sepia tone matrix, one row per output channel.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Fixed linear color transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTransform {
    /// Weighted luma, replicated into all three output channels
    Luma,
    /// Sepia toning
    Sepia,
}

impl ColorTransform {
    /// The 3x3 matrix for this transform.
    ///
    /// Luma is a single row vector, so its matrix repeats that row three
    /// times: every output channel receives the same weighted sum.
    pub fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            ColorTransform::Luma => [LUMA_WEIGHTS; 3],
            ColorTransform::Sepia => SEPIA_MATRIX,
        }
    }
}

/// An RGB pixel with channels clamped to `[0, 255]`.
///
/// # Examples
///
/// ```
/// use rasterkit_core::Pixel;
///
/// let p = Pixel::new(300, -5, 128);
/// assert_eq!(p.rgb(), (255, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

/// Clamp an integer to the valid channel range.
#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

impl Pixel {
    /// Black (0, 0, 0)
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };
    /// White (255, 255, 255)
    pub const WHITE: Pixel = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel, clamping each channel to `[0, 255]`.
    #[inline]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Pixel {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a gray pixel with all three channels equal to `v` (clamped).
    #[inline]
    pub fn gray(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Red channel.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// The channel selected by `channel`.
    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Channels as an `(r, g, b)` tuple.
    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    fn channels_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Add `factor` to every channel. Negative factors darken.
    pub fn adjust_brightness(self, factor: i32) -> Self {
        self.offset(factor, factor, factor)
    }

    /// Add a separate offset to each channel.
    pub fn offset(self, dr: i32, dg: i32, db: i32) -> Self {
        let [r, g, b] = self.channels_i32();
        Self::new(
            r.saturating_add(dr),
            g.saturating_add(dg),
            b.saturating_add(db),
        )
    }

    /// Gray pixel carrying the red channel.
    pub fn red_component(self) -> Self {
        self.component(Channel::Red)
    }

    /// Gray pixel carrying the green channel.
    pub fn green_component(self) -> Self {
        self.component(Channel::Green)
    }

    /// Gray pixel carrying the blue channel.
    pub fn blue_component(self) -> Self {
        self.component(Channel::Blue)
    }

    /// Gray pixel carrying the selected channel.
    pub fn component(self, channel: Channel) -> Self {
        Self::gray(self.channel(channel) as i32)
    }

    /// Gray pixel equal to `max(r, g, b)`.
    pub fn value(self) -> Self {
        Self::gray(self.r.max(self.g).max(self.b) as i32)
    }

    /// Gray pixel equal to the truncated mean of the channels.
    pub fn intensity(self) -> Self {
        let [r, g, b] = self.channels_i32();
        Self::gray((r + g + b) / 3)
    }

    /// Gray pixel equal to the weighted luma of the channels.
    pub fn luma(self) -> Self {
        self.transform(ColorTransform::Luma)
    }

    /// Sepia-toned pixel.
    pub fn sepia(self) -> Self {
        self.transform(ColorTransform::Sepia)
    }

    /// Apply a fixed color matrix. Each output is truncated, then clamped.
    pub fn transform(self, transform: ColorTransform) -> Self {
        let m = transform.matrix();
        let [r, g, b] = self.channels_i32().map(f64::from);
        let out = m.map(|row| (row[0] * r + row[1] * g + row[2] * b) as i32);
        Self::new(out[0], out[1], out[2])
    }

    /// Map every channel through `a*v^2 + b*v + c`, rounded half up.
    pub fn quadratic_transform(self, a: f64, b: f64, c: f64) -> Self {
        let apply = |v: i32| {
            let v = v as f64;
            (a * v * v + b * v + c + 0.5).floor() as i32
        };
        let [r, g, bl] = self.channels_i32();
        Self::new(apply(r), apply(g), apply(bl))
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Pixel { r, g, b }
    }
}

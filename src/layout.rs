use crate::error::RsbError;

/// Source pixel layout, keyed by the exact (red, green, blue, alpha) depth tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RsbLayout {
    /// 8/8/8/8, stored A, R, G, B.
    Rgba8888,
    /// 8/8/8/0, stored R, G, B. Output is opaque.
    Rgb888,
    /// 5/6/5/0 packed into a little-endian `u16`. Output is opaque.
    Rgb565,
    /// 4/4/4/4 packed into a little-endian `u16`.
    Rgba4444,
}

impl RsbLayout {
    /// Every supported layout.
    pub const ALL: [RsbLayout; 4] = [
        RsbLayout::Rgba8888,
        RsbLayout::Rgb888,
        RsbLayout::Rgb565,
        RsbLayout::Rgba4444,
    ];

    /// Classify a depth tuple. Anything but an exact match is rejected.
    pub fn from_depths(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self, RsbError> {
        match (red, green, blue, alpha) {
            (8, 8, 8, 8) => Ok(Self::Rgba8888),
            (8, 8, 8, 0) => Ok(Self::Rgb888),
            (5, 6, 5, 0) => Ok(Self::Rgb565),
            (4, 4, 4, 4) => Ok(Self::Rgba4444),
            _ => Err(RsbError::UnsupportedPixelFormat {
                red,
                green,
                blue,
                alpha,
            }),
        }
    }

    /// The (red, green, blue, alpha) depths this layout was classified from.
    pub fn depths(&self) -> (i32, i32, i32, i32) {
        match self {
            Self::Rgba8888 => (8, 8, 8, 8),
            Self::Rgb888 => (8, 8, 8, 0),
            Self::Rgb565 => (5, 6, 5, 0),
            Self::Rgba4444 => (4, 4, 4, 4),
        }
    }

    /// Bytes per source pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgba8888 => 4,
            Self::Rgb888 => 3,
            Self::Rgb565 | Self::Rgba4444 => 2,
        }
    }
}

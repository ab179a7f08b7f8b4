use alloc::string::String;
use enough::StopReason;

/// Errors from RSB decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RsbError {
    #[error("truncated input: need {needed} bytes, got {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error(
        "unsupported pixel format (redDepth={red}, greenDepth={green}, blueDepth={blue}, alphaDepth={alpha})"
    )]
    UnsupportedPixelFormat {
        red: i32,
        green: i32,
        blue: i32,
        alpha: i32,
    },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RsbError {
    fn from(r: StopReason) -> Self {
        RsbError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for RsbError {
    fn from(e: std::io::Error) -> Self {
        RsbError::ResourceUnavailable(e)
    }
}

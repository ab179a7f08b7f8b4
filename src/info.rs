use crate::error::RsbError;
use crate::header::RsbHeader;
use crate::layout::RsbLayout;

/// Image metadata obtained by probing the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Source pixel layout.
    pub layout: RsbLayout,
    pub header: RsbHeader,
}

impl ImageInfo {
    /// Probe the header without decoding pixels.
    ///
    /// Fails on the same header problems a full decode would: truncation,
    /// unsupported depths, non-positive dimensions. Pixel data is not checked.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RsbError> {
        Self::from_header(RsbHeader::parse(data)?)
    }

    pub fn from_header(header: RsbHeader) -> Result<Self, RsbError> {
        let layout = header.layout()?;
        let (width, height) = header.dimensions()?;
        Ok(Self {
            width,
            height,
            layout,
            header,
        })
    }

    /// Number of packed pixel bytes expected after the header, if it fits in `usize`.
    pub fn input_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.layout.bytes_per_pixel())
    }

    /// Size of the decoded RGBA8 buffer, if it fits in `usize`.
    pub fn output_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }
}

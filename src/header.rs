//! RSB header parsing.
//!
//! The header is seven consecutive little-endian `i32`s:
//!
//! | offset | field        |
//! |--------|--------------|
//! | 0      | file type    |
//! | 4      | width        |
//! | 8      | height       |
//! | 12     | red depth    |
//! | 16     | green depth  |
//! | 20     | blue depth   |
//! | 24     | alpha depth  |
//!
//! Pixel data follows immediately at offset 28.

use core::fmt;

use crate::error::RsbError;
use crate::layout::RsbLayout;

/// Size of the fixed RSB header in bytes.
pub const HEADER_LEN: usize = 28;

/// Parsed RSB header. Immutable once read.
///
/// Field values are taken verbatim from the file; nothing is validated here.
/// Layout classification and dimension checks happen when pixels are decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RsbHeader {
    /// Opaque file type tag, preserved but not interpreted.
    pub file_type: i32,
    pub width: i32,
    pub height: i32,
    pub red_depth: i32,
    pub green_depth: i32,
    pub blue_depth: i32,
    pub alpha_depth: i32,
}

impl RsbHeader {
    /// Parse the header from the first [`HEADER_LEN`] bytes of `data`.
    ///
    /// Trailing bytes are ignored.
    pub fn parse(data: &[u8]) -> Result<Self, RsbError> {
        let raw: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|s| s.try_into().ok())
            .ok_or(RsbError::TruncatedInput {
                needed: HEADER_LEN,
                available: data.len(),
            })?;
        Ok(Self::from_raw(raw))
    }

    /// Build a header from exactly [`HEADER_LEN`] bytes. Infallible.
    pub fn from_raw(raw: &[u8; HEADER_LEN]) -> Self {
        let field = |i: usize| {
            let off = i * 4;
            i32::from_le_bytes([raw[off], raw[off + 1], raw[off + 2], raw[off + 3]])
        };
        Self {
            file_type: field(0),
            width: field(1),
            height: field(2),
            red_depth: field(3),
            green_depth: field(4),
            blue_depth: field(5),
            alpha_depth: field(6),
        }
    }

    /// Read exactly [`HEADER_LEN`] bytes from `reader` and parse them.
    ///
    /// A short stream gives [`RsbError::TruncatedInput`]; other read failures
    /// give [`RsbError::ResourceUnavailable`].
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::Read + ?Sized>(reader: &mut R) -> Result<Self, RsbError> {
        let mut raw = [0u8; HEADER_LEN];
        crate::io::read_fully(reader, &mut raw)?;
        Ok(Self::from_raw(&raw))
    }

    /// Serialize back to the on-disk representation.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let fields = [
            self.file_type,
            self.width,
            self.height,
            self.red_depth,
            self.green_depth,
            self.blue_depth,
            self.alpha_depth,
        ];
        for (chunk, value) in out.chunks_exact_mut(4).zip(fields) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Sum of the four channel depths, or `None` if it overflows.
    pub fn bits_per_pixel(&self) -> Option<i32> {
        self.red_depth
            .checked_add(self.green_depth)?
            .checked_add(self.blue_depth)?
            .checked_add(self.alpha_depth)
    }

    /// Classify the channel depths into one of the supported layouts.
    pub fn layout(&self) -> Result<RsbLayout, RsbError> {
        RsbLayout::from_depths(
            self.red_depth,
            self.green_depth,
            self.blue_depth,
            self.alpha_depth,
        )
    }

    /// Width and height as `u32`, rejecting zero and negative values.
    pub fn dimensions(&self) -> Result<(u32, u32), RsbError> {
        match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(RsbError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }),
        }
    }
}

impl fmt::Display for RsbHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RedStormBitmap [fileType={}, width={}, height={}, redDepth={}, greenDepth={}, blueDepth={}, alphaDepth={}]",
            self.file_type,
            self.width,
            self.height,
            self.red_depth,
            self.green_depth,
            self.blue_depth,
            self.alpha_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn header(fields: [i32; 7]) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        for (chunk, value) in out.chunks_exact_mut(4).zip(fields) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    #[test]
    fn parses_fields_in_order() {
        let raw = header([7, 640, 480, 5, 6, 5, 0]);
        let h = RsbHeader::parse(&raw).unwrap();
        assert_eq!(h.file_type, 7);
        assert_eq!(h.width, 640);
        assert_eq!(h.height, 480);
        assert_eq!(h.red_depth, 5);
        assert_eq!(h.green_depth, 6);
        assert_eq!(h.blue_depth, 5);
        assert_eq!(h.alpha_depth, 0);
        assert_eq!(h.to_bytes(), raw);
    }

    #[test]
    fn negative_fields_survive_parsing() {
        let raw = header([-1, -2, 3, 8, 8, 8, 8]);
        let h = RsbHeader::parse(&raw).unwrap();
        assert_eq!(h.file_type, -1);
        assert_eq!(h.width, -2);
        assert!(matches!(
            h.dimensions(),
            Err(RsbError::InvalidDimensions {
                width: -2,
                height: 3
            })
        ));
    }

    #[test]
    fn short_header_is_truncated() {
        let raw = header([0, 1, 1, 8, 8, 8, 8]);
        match RsbHeader::parse(&raw[..27]) {
            Err(RsbError::TruncatedInput { needed, available }) => {
                assert_eq!(needed, HEADER_LEN);
                assert_eq!(available, 27);
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
        assert!(RsbHeader::parse(&[]).is_err());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut data = header([1, 2, 3, 8, 8, 8, 0]).to_vec();
        data.extend_from_slice(&[0xAA; 10]);
        let h = RsbHeader::parse(&data).unwrap();
        assert_eq!((h.width, h.height), (2, 3));
    }

    #[test]
    fn bits_per_pixel_does_not_overflow() {
        let h = RsbHeader::from_raw(&header([0, 1, 1, i32::MAX, 1, 0, 0]));
        assert_eq!(h.bits_per_pixel(), None);
        let h = RsbHeader::from_raw(&header([0, 1, 1, 4, 4, 4, 4]));
        assert_eq!(h.bits_per_pixel(), Some(16));
    }

    #[test]
    fn display_matches_summary_format() {
        let h = RsbHeader::from_raw(&header([3, 2, 1, 8, 8, 8, 8]));
        assert_eq!(
            h.to_string(),
            "RedStormBitmap [fileType=3, width=2, height=1, redDepth=8, greenDepth=8, blueDepth=8, alphaDepth=8]"
        );
    }
}
